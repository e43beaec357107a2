use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::RxError;

/// Default config location: `<config_dir>/rxscope/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rxscope").join("config.toml"))
}

/// Load configuration from the default location
///
/// A missing file yields the default config; a present-but-invalid file is
/// an error.
pub fn load_config() -> Result<Config, RxError> {
    match default_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load configuration from an explicit path
pub fn load_config_from(path: &Path) -> Result<Config, RxError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| RxError::InvalidConfig(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::config::types::DEFAULT_BASE_URL;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://localhost:9000\"").unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url =").unwrap();

        let result = load_config_from(file.path());
        assert!(matches!(result, Err(RxError::InvalidConfig(_))));
    }
}
