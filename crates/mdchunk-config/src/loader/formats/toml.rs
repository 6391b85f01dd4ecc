//! TOML format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from TOML string
pub fn parse(content: &str) -> Result<Config> {
    ::toml::from_str(content).map_err(|e| ConfigError::Parse {
        format: "TOML",
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_toml() {
        let toml = r#"
[chunking]
model = "gpt-4"
max_tokens = 256
"#;
        let config = parse(toml).unwrap();
        assert_eq!(config.chunking.max_tokens, 256);
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(parse("[chunking\nmodel =").is_err());
    }
}
