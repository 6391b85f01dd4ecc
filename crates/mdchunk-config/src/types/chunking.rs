//! Document chunking configuration

use serde::{Deserialize, Serialize};

/// Configuration for the token-aware document splitter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Tokenizer model name
    ///
    /// Must be a model known to the tokenizer.
    /// Examples: "gpt-4o", "gpt-4", "gpt-3.5-turbo"
    #[serde(default = "default_model")]
    pub model: String,

    /// Default token limit per chunk
    ///
    /// Counts the chunk as formatted for a model call, boundary markers
    /// included, so it should match the downstream context budget.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Minimum fill ratio for newline snapping
    ///
    /// A chunk boundary only moves to a nearby newline when the adjusted
    /// chunk still consumes at least this fraction of the token limit.
    #[serde(default = "default_min_fill")]
    pub min_fill: f64,

    /// Shrink step denominator
    ///
    /// An over-limit candidate slice is reduced by len / shrink_divisor
    /// characters (at least one) per attempt.
    #[serde(default = "default_shrink_divisor")]
    pub shrink_divisor: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            min_fill: default_min_fill(),
            shrink_divisor: default_shrink_divisor(),
        }
    }
}

impl crate::validation::Validate for ChunkingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::{validate_positive, validate_range};

        if self.model.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "chunking.model".to_string(),
                message: "model name cannot be empty".to_string(),
            });
        }

        validate_positive("chunking.max_tokens", self.max_tokens, 0)?;
        validate_range("chunking.min_fill", self.min_fill, 0.0, 1.0)?;
        validate_positive("chunking.shrink_divisor", self.shrink_divisor, 0)?;

        Ok(())
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_max_tokens() -> usize {
    512 // Safe for most embedding models
}

fn default_min_fill() -> f64 {
    0.8 // Skip the newline snap rather than emit needlessly small chunks
}

fn default_shrink_divisor() -> usize {
    10
}
