use crate::suggest::SuggestionIndex;

/// Maximum number of suggestions shown at once
pub const SUGGESTION_LIMIT: usize = 8;

/// State of the autocomplete dropdown attached to the search field
///
/// Two conceptual states: idle (hidden, no highlight) and suggesting
/// (visible, non-empty list). The highlighted entry is `None` when the
/// keyboard has not selected anything yet.
pub struct AutocompleteState {
    suggestions: Vec<String>,
    visible: bool,
    active: Option<usize>,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
            visible: false,
            active: None,
        }
    }

    /// Recompute suggestions for the current query text
    ///
    /// A blank (trimmed-empty) query always clears and hides the list.
    /// Any recompute resets the highlight, so it can never reference a
    /// stale list.
    pub fn recompute(&mut self, index: &SuggestionIndex, query: &str) {
        self.active = None;
        if query.trim().is_empty() {
            self.suggestions.clear();
            self.visible = false;
            return;
        }

        self.suggestions = index
            .filter(query, SUGGESTION_LIMIT)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.visible = !self.suggestions.is_empty();
    }

    /// Hide the dropdown without discarding the computed list
    ///
    /// The list is kept so that regaining focus can re-show it without a
    /// recompute.
    pub fn hide(&mut self) {
        self.visible = false;
        self.active = None;
    }

    /// Re-show the last computed list when the field regains focus
    pub fn show_existing(&mut self, query: &str) {
        if !query.trim().is_empty() && !self.suggestions.is_empty() {
            self.visible = true;
        }
    }

    /// Move the highlight down one entry, stopping at the last
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.active = match self.active {
            None => Some(0),
            Some(i) if i + 1 < self.suggestions.len() => Some(i + 1),
            Some(i) => Some(i),
        };
    }

    /// Move the highlight up one entry, descending to "no selection"
    pub fn select_previous(&mut self) {
        self.active = match self.active {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Text of the highlighted suggestion, if any
    pub fn selected(&self) -> Option<&str> {
        self.active.map(|i| self.suggestions[i].as_str())
    }

    /// Suggestion at a given row, for mouse selection
    pub fn suggestion_at(&self, row: usize) -> Option<&str> {
        self.suggestions.get(row).map(String::as_str)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }
}

impl Default for AutocompleteState {
    fn default() -> Self {
        Self::new()
    }
}
