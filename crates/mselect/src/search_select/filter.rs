//! Decides what a new input value does to the active filter.

/// Minimum length, in characters, of a filter worth sending.
pub const MIN_FILTER_CHARS: usize = 3;

/// Outcome of an input change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    /// Leave results, page and filter alone.
    Keep,
    /// Start a new session for this filter. Empty means the default listing.
    Reset(String),
}

/// Classify `input` against the `active` filter.
///
/// An empty input always resets to the unfiltered listing. One or two
/// characters change nothing. Longer input resets only when it differs from
/// the active filter.
pub fn classify(active: &str, input: &str) -> FilterChange {
    match input.chars().count() {
        0 => FilterChange::Reset(String::new()),
        n if n < MIN_FILTER_CHARS => FilterChange::Keep,
        _ if input == active => FilterChange::Keep,
        _ => FilterChange::Reset(input.to_string()),
    }
}
