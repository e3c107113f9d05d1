// src/summary/readme.rs
// =============================================================================
// Turns a README into a one-paragraph synopsis.
//
// Steps:
// 1. Decode the base64 `content` field GitHub sends back
// 2. Convert bytes to text, silently dropping invalid UTF-8
// 3. Take the first non-blank paragraph, flatten it to one line
// 4. Cap it at 300 characters with a trailing "..."
// =============================================================================

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::github::GithubError;

/// Longest synopsis we keep, counted in characters (not bytes)
pub const MAX_SUMMARY_CHARS: usize = 300;

/// Appended when a synopsis is cut short
pub const ELLIPSIS: &str = "...";

// Decodes the `content` field of a README payload into text.
//
// GitHub wraps the base64 at 60 columns, so all whitespace is stripped
// before decoding. Byte sequences that aren't valid UTF-8 are discarded
// rather than replaced, so a stray Latin-1 byte doesn't turn into U+FFFD.
pub fn decode_readme_content(content: &str, context: &str) -> Result<String, GithubError> {
    let compact: Vec<u8> = content
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(compact)
        .map_err(|source| GithubError::Base64 {
            context: context.to_string(),
            source,
        })?;

    Ok(utf8_ignoring_invalid(&bytes))
}

fn utf8_ignoring_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

// Extracts the synopsis from decoded README text.
//
// Returns None when the text has no non-blank paragraph.
pub fn summarize_readme(text: &str) -> Option<String> {
    let text = text.replace("\r\n", "\n");

    let first = text
        .split("\n\n")
        .map(str::trim)
        .find(|p| !p.is_empty())?;

    let flattened = first.replace('\n', " ");
    Some(truncate_summary(flattened.trim()))
}

// Cuts `summary` to MAX_SUMMARY_CHARS characters, adding ELLIPSIS if it was longer
pub fn truncate_summary(summary: &str) -> String {
    match summary.char_indices().nth(MAX_SUMMARY_CHARS) {
        Some((cut, _)) => format!("{}{}", &summary[..cut], ELLIPSIS),
        None => summary.to_string(),
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why char_indices().nth() instead of &summary[..300]?
//    - Slicing a &str takes byte offsets
//    - A README full of emoji or CJK text would panic at a non-char boundary
//    - nth(300) gives the byte offset of the 301st character, which is
//      always a valid place to cut
//
// 2. What does utf8_chunks() do?
//    - Splits a byte slice into runs of valid UTF-8 and the invalid bytes
//      between them; we keep only the valid runs
// -----------------------------------------------------------------------------
