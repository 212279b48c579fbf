//! Full-text search query construction for the pose catalog.
//!
//! Lives in `core` (no internal deps) so both the repository layer and any
//! future seeding/CLI tooling can build identical queries.

/// Default number of catalog results per page.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum number of catalog results per page.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Sanitize user input into a list of terms suitable for tsquery construction.
///
/// - Splits on whitespace.
/// - Strips non-alphanumeric characters (except `_`) from each term.
/// - Drops empty terms.
///
/// Returns `None` if the input yields no usable terms.
fn sanitize_terms(query: &str) -> Option<Vec<&str>> {
    let terms: Vec<&str> = query
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '_'))
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}

/// Sanitize and convert user input into a PostgreSQL `tsquery` string.
///
/// Whitespace-separated terms are joined with `&` (AND) and the last term
/// gets a `:*` prefix match so search-as-you-type works for partial words.
/// Empty or whitespace-only input returns `None`.
///
/// # Examples
///
/// ```
/// use yogaflow_core::search::build_tsquery;
/// assert_eq!(build_tsquery("downward dog"), Some("downward & dog:*".to_string()));
/// assert_eq!(build_tsquery("warri"), Some("warri:*".to_string()));
/// assert_eq!(build_tsquery("  "), None);
/// ```
pub fn build_tsquery(query: &str) -> Option<String> {
    let terms = sanitize_terms(query)?;

    if terms.len() == 1 {
        return Some(format!("{}:*", terms[0]));
    }

    let exact = &terms[..terms.len() - 1];
    let prefix = terms[terms.len() - 1];
    Some(format!("{} & {}:*", exact.join(" & "), prefix))
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
