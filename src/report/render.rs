// src/report/render.rs
// =============================================================================
// Produces the final Markdown.
//
// Two pieces:
// - render_projects(): the bullet list that replaces {{projects}}
// - render_template(): plain find-and-replace of {{key}} placeholders
//
// There is no template language here. Unknown placeholders are left exactly
// as written so a typo shows up in the output instead of vanishing.
// =============================================================================

use super::aggregate::{AggregatedStats, ProjectEntry};

pub const PROJECTS_HEADER: &str = "## 🧩 Projects (Auto-Generated)";

/// Rendered instead of the list when the user has no repositories
pub const NO_PROJECTS: &str = "No public repositories found.";

pub const PROJECTS_KEY: &str = "projects";

// Header, blank line, then one bullet per project in the given order:
//
//   - **[name](url)** ⭐42 — summary
pub fn render_projects(projects: &[ProjectEntry]) -> String {
    if projects.is_empty() {
        return NO_PROJECTS.to_string();
    }

    let mut lines = Vec::with_capacity(projects.len() + 2);
    lines.push(PROJECTS_HEADER.to_string());
    lines.push(String::new());

    for p in projects {
        lines.push(format!(
            "- **[{}]({})** ⭐{} — {}",
            p.name, p.url, p.stars, p.summary
        ));
    }

    lines.join("\n")
}

// Wraps a key in its placeholder braces: "name" -> "{{name}}"
pub fn placeholder(key: &str) -> String {
    format!("{{{{{}}}}}", key)
}

// Replaces every {{key}} for the stats fields, then {{projects}}.
//
// Stats go first so a project summary that happens to contain "{{name}}"
// is left alone.
pub fn render_template(template: &str, stats: &AggregatedStats, projects_md: &str) -> String {
    let mut output = template.to_string();

    for (key, value) in stats.placeholders() {
        output = output.replace(&placeholder(key), &value);
    }

    output.replace(&placeholder(PROJECTS_KEY), projects_md)
}
