//! YAML format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from YAML string
pub fn parse(content: &str) -> Result<Config> {
    serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
        format: "YAML",
        message: e.to_string(),
    })
}
