//! URL slug derivation for user-entered names and titles.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

/// Lowercase `value`, collapse every run of non-alphanumeric characters into
/// a single hyphen, and trim leading/trailing hyphens. May return an empty
/// string; callers that need a non-empty slug supply their own fallback.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
