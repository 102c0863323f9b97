//! Free-text filtering of result titles

/// Case-insensitive token match.
///
/// An empty or blank query matches everything. Otherwise every
/// whitespace-separated token of the query must occur somewhere in `text`.
pub fn matches(query: &str, text: &str) -> bool {
    let text = text.to_lowercase();
    query
        .to_lowercase()
        .split_whitespace()
        .all(|token| text.contains(token))
}
