use crate::io::CatalogPaths;
use crate::{CatalogError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// User settings read from `config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Catalog store file. Relative paths are taken from the working directory.
    pub store: Option<PathBuf>,
    /// Log level used when none is given on the command line
    pub log_level: Option<LogLevel>,
}

impl Settings {
    /// Load settings from an explicit path. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&contents).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load settings from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from `--config` when given, else from the platform settings file
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_or_default(&CatalogPaths::default().settings_file()),
        }
    }

    fn parse(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(contents)?)
    }

    /// Store location: the command line wins, then settings, then `library.json`
    pub fn resolve_store(&self, cli_store: Option<&Path>, working_dir: &Path) -> PathBuf {
        match cli_store.or(self.store.as_deref()) {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => working_dir.join(path),
            None => CatalogPaths::default_store(working_dir),
        }
    }

    /// Log level: the command line wins, then settings, then `warn`
    pub fn resolve_log_level(&self, cli_level: Option<LogLevel>) -> LogLevel {
        cli_level.or(self.log_level).unwrap_or_default()
    }
}
