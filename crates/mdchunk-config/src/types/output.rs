//! Chunk record serialization configuration

use serde::{Deserialize, Serialize};

/// Configuration for how chunk records are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Serialization format for chunk records
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON (only meaningful for the `json` format)
    #[serde(default)]
    pub pretty: bool,
}

/// Chunk record output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON object per line, one line per chunk
    Jsonl,
    /// A single JSON array of chunks
    Json,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: false,
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Jsonl
    }
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        }
    }
}

impl crate::validation::Validate for OutputConfig {
    fn validate(&self) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_serialization() {
        assert_eq!(
            serde_json::to_string(&OutputFormat::Jsonl).unwrap(),
            "\"jsonl\""
        );
        assert_eq!(
            serde_json::to_string(&OutputFormat::Json).unwrap(),
            "\"json\""
        );
    }

    #[test]
    fn test_default_format_is_jsonl() {
        assert_eq!(OutputConfig::default().format, OutputFormat::Jsonl);
    }
}
