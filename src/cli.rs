//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

/// Terminal dashboard for drug search with community sentiment insights
#[derive(Debug, Parser)]
#[command(name = "rxscope", version, about)]
pub struct Cli {
    /// Base URL of the drug insights API (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a drug summaries JSON file (defaults to the bundled dataset)
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Path to a drug names JSON file (defaults to the bundled candidate set)
    #[arg(long, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_valid() {
        let cli = Cli::parse_from(["rxscope"]);
        assert!(cli.base_url.is_none());
        assert!(cli.data.is_none());
        assert!(cli.names.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_all_flags_parse() {
        let cli = Cli::parse_from([
            "rxscope",
            "--base-url",
            "http://localhost:9000",
            "--data",
            "/tmp/summaries.json",
            "--names",
            "/tmp/names.json",
            "--config",
            "/tmp/config.toml",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cli.data.as_deref(), Some(std::path::Path::new("/tmp/summaries.json")));
        assert_eq!(cli.names.as_deref(), Some(std::path::Path::new("/tmp/names.json")));
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/config.toml")));
    }
}
