//! Narration script cleanup and headline selection.
//!
//! Scripts arrive as loosely formatted text with section markers such as
//! `Hook:` or `CTA:` and bullet prefixes. Caption text wants those markers
//! stripped; the headline overlay wants the hook line found before any
//! stripping happens.

/// Headline used when the script has no usable line at all.
pub const DEFAULT_HEADLINE: &str = "Today's top stories";

/// Section markers stripped from the start of a line, case-insensitive.
const SECTION_MARKERS: [&str; 3] = ["Hook:", "CTA:", "Main points:"];

/// Returns the caption-ready lines of a raw script.
///
/// Each line is trimmed, one leading section marker or bullet symbol is
/// removed, and lines that end up empty are dropped. Word content is never
/// reordered or rewritten.
#[must_use]
pub fn clean_script_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let cleaned = strip_marker(line).trim();
            if cleaned.is_empty() {
                None
            } else {
                Some(cleaned.to_string())
            }
        })
        .collect()
}

/// Picks the overlay headline from the raw script text.
///
/// The first line starting with `hook:` (case-insensitive) wins and yields
/// the text after the marker, even when that text is empty. Without a hook
/// line the first non-blank line is used as-is, and a fixed default covers
/// the fully blank script.
#[must_use]
pub fn select_headline(raw: &str) -> String {
    for line in raw.lines() {
        let trimmed = line.trim();
        if let Some(rest) = strip_ascii_prefix_ci(trimmed, "Hook:") {
            return rest.trim().to_string();
        }
    }
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(DEFAULT_HEADLINE)
        .to_string()
}

fn strip_marker(line: &str) -> &str {
    for marker in SECTION_MARKERS {
        if let Some(rest) = strip_ascii_prefix_ci(line, marker) {
            return rest;
        }
    }
    if let Some(rest) = line.strip_prefix(['-', '•']) {
        return rest;
    }
    line
}

/// Strips `prefix` from the start of `line`, ignoring ASCII case. The
/// prefixes in use are pure ASCII, so a byte-length slice is safe: a
/// non-boundary index means a multi-byte character and therefore no match.
fn strip_ascii_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}
