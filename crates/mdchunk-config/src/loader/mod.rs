//! Configuration loading
//!
//! Probes the working directory for a `.mdchunk.*` file, or loads an
//! explicit path, dispatching on the file extension.

pub mod formats;

use crate::error::ConfigError;
use crate::validation::Validate;
use crate::{Config, Result};
use std::path::Path;

const CANDIDATES: [&str; 4] = [
    ".mdchunk.yml",
    ".mdchunk.yaml",
    ".mdchunk.toml",
    ".mdchunk.json",
];

impl Config {
    /// Load from the default location in the working directory, falling
    /// back to defaults when no config file exists.
    pub fn load() -> Result<Self> {
        for name in CANDIDATES {
            let path = Path::new(name);
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::default())
    }

    /// Load and validate a config file, dispatching on its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => formats::yaml::parse(&content)?,
            Some("toml") => formats::toml::parse(&content)?,
            Some("json") => formats::json::parse(&content)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        config.validate()?;
        Ok(config)
    }
}
