//! Normalization of free-text tag input

/// Longest tag accepted, in characters
pub const MAX_TAG_LEN: usize = 50;

/// Turn comma-separated user input into a clean tag list
///
/// Each piece is trimmed and lowercased; empty pieces and pieces longer than
/// [`MAX_TAG_LEN`] characters are dropped, and duplicates keep their first
/// position. Never fails.
///
/// # Examples
/// ```
/// use gifr::metadata::sanitize;
/// assert_eq!(sanitize("Cat, Funny , cat,,"), vec!["cat", "funny"]);
/// ```
#[must_use]
pub fn sanitize(input: &str) -> Vec<String> {
    normalize_tags(input.split(','))
}

/// Apply the per-tag rules of [`sanitize`] to already separated pieces
#[must_use]
pub fn normalize_tags<I, S>(pieces: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = Vec::new();
    for piece in pieces {
        let tag = piece.as_ref().trim().to_lowercase();
        let len = tag.chars().count();
        if len == 0 || len > MAX_TAG_LEN || tags.contains(&tag) {
            continue;
        }
        tags.push(tag);
    }
    tags
}
