//! Configuration loading
//!
//! Reads `<config_dir>/rxscope/config.toml` if present; every field has a
//! default so a missing or partial file is never an error.

mod loader;
mod types;

pub use loader::{default_config_path, load_config, load_config_from};
pub use types::{ApiConfig, Config};
