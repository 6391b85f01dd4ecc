//! Configuration type definitions
//!
//! Each type is self-contained with validation and sensible defaults.

pub mod chunking;
pub mod output;

// Re-export all types for convenience
pub use chunking::ChunkingConfig;
pub use output::{OutputConfig, OutputFormat};

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Document chunking behavior
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Chunk record serialization
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunking: ChunkingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.chunking.validate()?;
        self.output.validate()?;
        Ok(())
    }
}
