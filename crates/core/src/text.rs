//! Text transforms for editor-facing fields.
//!
//! Workshop descriptions and audience bullets are stored as ordered
//! sequences of paragraph strings, but edited as newline-joined text.
//! These helpers convert between the two shapes and derive slugs from
//! titles for canonical workshop identifiers.

/// Split editor text into an ordered sequence of paragraphs.
///
/// Splits on newlines, trims each line, and drops blanks. The transform
/// is idempotent: re-splitting the joined output yields the same sequence.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join a paragraph sequence back into newline-separated editor text.
pub fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs.join("\n")
}

/// Derive a URL-safe slug from a title.
///
/// Lowercases, collapses any run of non-alphanumeric characters into a
/// single hyphen, and strips leading/trailing hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
