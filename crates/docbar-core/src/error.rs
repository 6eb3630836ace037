//! Error types for loading and resolving sidebar configuration.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::Field;

/// Failure while reading, parsing, resolving or writing sidebar configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse TOML {}: {source}", path.display())]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("parse JSON {}: {source}", path.display())]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("serialize TOML config: {0}")]
    SerializeToml(#[from] toml::ser::Error),

    #[error("serialize JSON config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// A field was neither in the config file nor given as an override.
    #[error("missing sidebar field '{field}' (set it in the config file, pass --{field}, or use --permissive)")]
    MissingField { field: Field },

    #[error("config file already exists at {}; use --force to overwrite", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("locate XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),

    #[error("locate XDG config file: {0}")]
    XdgPlace(#[source] std::io::Error),
}
