// ============================================================================
// Tokenization
// Multi-separator splitting and integer coercion of tokens
// ============================================================================

/// Split `body` on every separator in turn.
///
/// Starts from a single fragment holding the whole body; each separator is
/// applied to every fragment produced so far and the results are flattened.
/// Any mix of separators in the same body is therefore tolerated. Empty
/// separators are skipped.
///
/// # Example
/// ```
/// use string_calculator::numeric::split_all;
///
/// let fragments = split_all("1;2\n3", &[";", "\n"]);
/// assert_eq!(fragments, vec!["1", "2", "3"]);
/// ```
pub fn split_all<'a, S: AsRef<str>>(body: &'a str, separators: &[S]) -> Vec<&'a str> {
    let mut fragments = vec![body];
    for separator in separators {
        let separator = separator.as_ref();
        if separator.is_empty() {
            continue;
        }
        fragments = fragments
            .into_iter()
            .flat_map(|fragment| fragment.split(separator))
            .collect();
    }
    fragments
}

/// Parse one token as a base-10 integer, optionally signed.
///
/// Surrounding whitespace is trimmed first. Returns `None` for anything that
/// is not an integer in `i64` range, including empty and whitespace-only
/// tokens.
#[inline]
pub fn parse_token(token: &str) -> Option<i64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
