//! Suggestion index for the autocomplete field
//!
//! Holds the fixed list of known drug names and answers case-insensitive
//! substring queries against it. A flat linear scan is sufficient for the
//! candidate sets this tool ships with (hundreds to low thousands of names).

use crate::error::RxError;

/// Bundled candidate set, embedded at compile time
const BUNDLED_NAMES: &str = include_str!("../data/drug_names.json");

/// The fixed, session-immutable set of searchable drug names
pub struct SuggestionIndex {
    names: Vec<String>,
}

impl SuggestionIndex {
    /// Create an index from a list of names, preserving their order
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load the candidate set that ships inside the binary
    pub fn bundled() -> Result<Self, RxError> {
        Self::from_json(BUNDLED_NAMES)
    }

    /// Load a candidate set from an external file (the `--names` override)
    pub fn from_file(path: &std::path::Path) -> Result<Self, RxError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse an index from a JSON array of strings
    pub fn from_json(json: &str) -> Result<Self, RxError> {
        let names: Vec<String> =
            serde_json::from_str(json).map_err(|e| RxError::InvalidNames(e.to_string()))?;
        Ok(Self::new(names))
    }

    /// Number of names in the candidate set
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Return up to `limit` names containing `query` as a case-insensitive
    /// substring, in the candidate set's original order.
    ///
    /// The filter is stable: no re-ranking, no fuzzy scoring. An empty
    /// result is a valid outcome.
    pub fn filter(&self, query: &str, limit: usize) -> Vec<&str> {
        if query.is_empty() {
            return Vec::new();
        }

        let query_lower = query.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&query_lower))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}
