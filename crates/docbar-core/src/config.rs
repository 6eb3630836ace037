//! Sidebar configuration: file loading, CLI overrides and missing-field policy.
//!
//! The config file holds the five render values, each optional so a file can
//! be partial and completed from the command line. `.json` files are read as
//! JSON, everything else as TOML.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::sidebar::RenderConfig;

const APP_PREFIX: &str = "docbar";
const CONFIG_FILE: &str = "config.toml";

/// One of the five render values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Base,
    Host,
    Path,
    Package,
    Version,
}

impl Field {
    /// All fields, in the order they are resolved.
    pub const ALL: [Field; 5] = [
        Field::Base,
        Field::Host,
        Field::Path,
        Field::Package,
        Field::Version,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Base => "base",
            Field::Host => "host",
            Field::Path => "path",
            Field::Package => "package",
            Field::Version => "version",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Possibly-incomplete set of render values, as found in a config file or
/// given as command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl SidebarFields {
    /// Values written by `init` as a starting point.
    pub fn example() -> Self {
        Self {
            base: Some("CDF".to_string()),
            host: Some("example.com".to_string()),
            path: Some("dist".to_string()),
            package: Some("cdf".to_string()),
            version: Some("1.2.0".to_string()),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Base => self.base.as_deref(),
            Field::Host => self.host.as_deref(),
            Field::Path => self.path.as_deref(),
            Field::Package => self.package.as_deref(),
            Field::Version => self.version.as_deref(),
        }
    }
}

/// What to do when a field is neither in the file nor overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    /// Fail with [`ConfigError::MissingField`].
    #[default]
    Strict,
    /// Substitute an empty string and log a warning.
    Permissive,
}

/// Default config location, `~/.config/docbar/config.toml`. Creates the
/// parent directory if needed.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    xdg_dirs
        .place_config_file(CONFIG_FILE)
        .map_err(ConfigError::XdgPlace)
}

/// Existing config file in the XDG search path, if any.
pub fn find_config() -> Result<Option<PathBuf>, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.find_config_file(CONFIG_FILE))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Parse config text; `path` only selects the format and labels errors.
pub fn parse(path: &Path, data: &str) -> Result<SidebarFields, ConfigError> {
    if is_json(path) {
        serde_json::from_str(data).map_err(|source| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(data).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load a config file.
pub fn load(path: &Path) -> Result<SidebarFields, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let fields = parse(path, &data)?;
    tracing::debug!("loaded sidebar config from {}", path.display());
    Ok(fields)
}

/// Load `explicit` if given, else the XDG config if one exists, else nothing.
pub fn load_from(explicit: Option<&Path>) -> Result<SidebarFields, ConfigError> {
    if let Some(path) = explicit {
        return load(path);
    }
    match find_config()? {
        Some(path) => load(&path),
        None => {
            tracing::debug!("no config file found; using overrides only");
            Ok(SidebarFields::default())
        }
    }
}

/// Merge `file` and `overrides` (overrides win) into a complete [`RenderConfig`].
///
/// Fields are checked in [`Field::ALL`] order; under [`MissingFieldPolicy::Strict`]
/// the first missing one is reported.
pub fn resolve(
    file: &SidebarFields,
    overrides: &SidebarFields,
    policy: MissingFieldPolicy,
) -> Result<RenderConfig, ConfigError> {
    let pick = |field: Field| -> Result<String, ConfigError> {
        match overrides.get(field).or_else(|| file.get(field)) {
            Some(v) => Ok(v.to_string()),
            None => match policy {
                MissingFieldPolicy::Strict => Err(ConfigError::MissingField { field }),
                MissingFieldPolicy::Permissive => {
                    tracing::warn!(field = field.name(), "missing sidebar field; rendering empty");
                    Ok(String::new())
                }
            },
        }
    };

    Ok(RenderConfig {
        base: pick(Field::Base)?,
        host: pick(Field::Host)?,
        path: pick(Field::Path)?,
        package: pick(Field::Package)?,
        version: pick(Field::Version)?,
    })
}

/// Write a starter config to `path`. Refuses to overwrite unless `force`.
pub fn init(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    let example = SidebarFields::example();
    let data = if is_json(path) {
        serde_json::to_string_pretty(&example)? + "\n"
    } else {
        toml::to_string_pretty(&example)?
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote starter config to {}", path.display());
    Ok(())
}
