//! Application shell
//!
//! Owns all top-level UI state (query, results, selection, tabs, loading)
//! and wires the autocomplete, dataset lookup and API worker together. All
//! mutation goes through named methods on [`App`].

mod effects_render;
mod events;
mod mouse;
mod recommend_render;
mod render;
mod responses;
mod sentiment_render;
mod state;
mod summary_render;

#[cfg(test)]
pub(crate) mod test_support;

pub use state::{App, DetailTab, Focus};
