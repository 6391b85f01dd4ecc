//! JSON format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from JSON string
pub fn parse(content: &str) -> Result<Config> {
    serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        format: "JSON",
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_json() {
        let json = r#"{"output": {"format": "json", "pretty": true}}"#;
        let config = parse(json).unwrap();
        assert!(config.output.pretty);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse("{\"chunking\":").is_err());
    }
}
