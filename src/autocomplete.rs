//! Autocomplete for the drug search field
//!
//! Suggests known drug names while the user types, with keyboard and mouse
//! selection. Filtering happens synchronously on every keystroke, so the
//! suggestion list always reflects the most recent query.

mod highlight;
mod render;
mod state;

pub use highlight::{find_matches, highlight_line};
pub use render::render_popup;
pub use state::{AutocompleteState, SUGGESTION_LIMIT};
