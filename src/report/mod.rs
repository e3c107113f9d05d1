// src/report/mod.rs
// =============================================================================
// Aggregation and rendering of the resume.
//
// Submodules:
// - aggregate: stats and the ranked project list
// - render: Markdown for the project list and placeholder substitution
// =============================================================================

mod aggregate;
mod render;

pub use aggregate::{build_projects, AggregatedStats, ProjectEntry};
pub use render::{placeholder, render_projects, render_template};
