//! Post sanitizer: turns one block of raw model output into discrete, plain-ASCII posts.

use std::sync::LazyLock;

use regex::Regex;

/// Post boundaries: a newline followed by a numeric ordinal ("\n3. "), a dash
/// bullet, a bullet character, or a bare newline.
static POST_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\d+\.\s*|\n-\s*|\n•\s*|\n").expect("valid boundary regex"));

static ASTERISK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*+").expect("valid asterisk regex"));

/// Literal `\uXXXX` escape artifacts the model sometimes emits as text.
static UNICODE_ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\u[0-9a-fA-F]{4}").expect("valid unicode escape regex"));

/// Splits `raw` into posts, cleans each one and keeps at most `max_count`.
///
/// Fragments that are empty after cleaning are dropped, so the result may be
/// shorter than `max_count` (or empty).
pub fn sanitize(raw: &str, max_count: usize) -> Vec<String> {
    POST_BOUNDARY_RE
        .split(raw)
        .filter_map(clean_fragment)
        .take(max_count)
        .collect()
}

fn clean_fragment(fragment: &str) -> Option<String> {
    let without_asterisks = ASTERISK_RUN_RE.replace_all(fragment.trim(), "");
    let without_escapes = UNICODE_ESCAPE_RE.replace_all(&without_asterisks, "");
    let printable: String = without_escapes
        .chars()
        .filter(|&c| c == '#' || (' '..='~').contains(&c))
        .collect();

    let clean = printable.trim();
    (!clean.is_empty()).then(|| clean.to_string())
}
