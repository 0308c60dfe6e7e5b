//! Search configuration for city lookups.

/// Configuration parameters for city search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Shortest accepted search text, in characters.
    /// Shorter queries are rejected before the store is consulted.
    pub min_text_chars: usize,

    /// Maximum number of cities returned by a text search.
    pub max_results: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_text_chars: usize, max_results: usize) -> Self {
        Self {
            min_text_chars,
            max_results,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_text_chars: 3,
            max_results: 10,
        }
    }
}
