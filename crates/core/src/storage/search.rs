//! Keyword search helpers shared by SQL-backed repositories.

/// Escape character used in `LIKE ... ESCAPE` clauses built by [`like_pattern`].
pub const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching `keyword` anywhere in a column.
///
/// `%`, `_` and the escape character itself are escaped so the keyword is
/// matched literally. Use together with `ESCAPE '\'`.
///
/// # Examples
///
/// ```
/// use lostfound_core::storage::like_pattern;
///
/// assert_eq!(like_pattern("phone"), "%phone%");
/// assert_eq!(like_pattern("100%"), "%100\\%%");
/// ```
pub fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
