//! Handles settings for the application.
//!
//! Sources, lowest priority first: built-in defaults, the optional
//! `expenses.toml` file (or `--config`), `EXPENSES_*` environment variables,
//! command-line flags.
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "expenses.toml";
const ENV_PREFIX: &str = "EXPENSES";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// File the expense list is loaded from and saved to.
    pub data_file: PathBuf,
    /// Log level for both the binary and the engine.
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(engine::DEFAULT_DATA_FILE),
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "expenses", about = "Track expenses from an interactive menu")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the data file (default `Expenses.dat`).
    #[arg(long)]
    data_file: Option<PathBuf>,
    /// Override the log level (e.g. `info`, `debug`).
    #[arg(long)]
    level: Option<String>,
}

/// Parses the process arguments and resolves the settings.
pub fn load() -> Result<Settings> {
    resolve(Args::parse())
}

pub fn resolve(args: Args) -> Result<Settings> {
    let mut builder = config::Config::builder();
    builder = match &args.config {
        Some(path) => builder.add_source(config::File::from(path.as_path()).required(true)),
        None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_PATH).required(false)),
    };
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(data_file) = args.data_file {
        settings.data_file = data_file;
    }
    if let Some(level) = args.level {
        settings.level = level;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("expenses").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_use_expenses_dat() {
        let settings = Settings::default();
        assert_eq!(settings.data_file, PathBuf::from("Expenses.dat"));
        assert_eq!(settings.level, "warn");
    }

    #[test]
    fn flags_override_defaults() {
        let settings = resolve(args(&["--data-file", "/tmp/other.dat", "--level", "debug"])).unwrap();
        assert_eq!(settings.data_file, PathBuf::from("/tmp/other.dat"));
        assert_eq!(settings.level, "debug");
    }

    #[test]
    fn config_file_is_read_and_flags_win() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "data_file = \"from_file.dat\"\nlevel = \"info\"\n").unwrap();

        let config = path.to_str().unwrap();
        let settings = resolve(args(&["--config", config])).unwrap();
        assert_eq!(settings.data_file, PathBuf::from("from_file.dat"));
        assert_eq!(settings.level, "info");

        let settings = resolve(args(&["--config", config, "--level", "trace"])).unwrap();
        assert_eq!(settings.data_file, PathBuf::from("from_file.dat"));
        assert_eq!(settings.level, "trace");
    }

    #[test]
    fn explicit_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(resolve(args(&["--config", path.to_str().unwrap()])).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["expenses", "--bogus"]).is_err());
    }
}
