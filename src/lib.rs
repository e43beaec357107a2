//! rxscope: a terminal dashboard for exploring drug information
//!
//! Combines a remote drug insights API (search, sentiment, recommendations,
//! side effects) with a locally bundled dataset of pre-computed community
//! summaries. The UI is a single-screen ratatui app: a search field with an
//! autocomplete dropdown, a result list, and a tabbed detail pane.

pub mod api;
pub mod app;
pub mod autocomplete;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod notification;
pub mod suggest;
pub mod widgets;
