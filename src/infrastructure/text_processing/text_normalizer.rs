use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::domain::NormalizedText;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static PAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpage\s*\d+\b").unwrap());
static CONTROL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x1F\x7F]").unwrap());
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\n\s*").unwrap());
static SEPARATOR_ARTIFACTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[|\\/_]+").unwrap());

/// Normalizes document text for chunking.
///
/// A single pass can leave work behind (removing "page 3" from "a page 3 b"
/// leaves a double space), so passes repeat until the output is stable.
/// This makes `normalize_text(normalize_text(x)) == normalize_text(x)`.
pub fn normalize_text(raw: &str) -> NormalizedText {
    let mut current = normalize_pass(raw);

    loop {
        let next = normalize_pass(&current);
        if next == current {
            return NormalizedText::from_normalized(current);
        }
        current = next;
    }
}

fn normalize_pass(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    let collapsed = WHITESPACE_RUN.replace_all(&folded, " ");
    let without_markers = PAGE_MARKER.replace_all(&collapsed, "");
    let without_controls = CONTROL_CHARS.replace_all(&without_markers, "");
    let single_line = LINE_BREAK.replace_all(&without_controls, " ");

    single_line.trim().to_string()
}

/// Strips the table-rule and underline characters recognition engines
/// emit for ruled forms. Applied to recognized raster images only.
pub fn strip_separator_artifacts(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let without_rules = SEPARATOR_ARTIFACTS.replace_all(collapsed.trim(), " ");

    WHITESPACE_RUN
        .replace_all(&without_rules, " ")
        .trim()
        .to_string()
}
