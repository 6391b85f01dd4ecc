//! Configuration management for mdchunk
//!
//! This crate provides a validated configuration system with support for:
//! - Multiple formats (YAML, TOML, JSON)
//! - Config validation with helpful error messages
//! - Type-safe configuration structs
//!
//! # Example
//!
//! ```no_run
//! use mdchunk_config::Config;
//!
//! // Load from default location (.mdchunk.{yml,toml,json})
//! let config = Config::load()?;
//!
//! // Or load from specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! // Access config values
//! let model = config.chunking.model;
//! let limit = config.chunking.max_tokens;
//! # Ok::<(), mdchunk_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use error::{ConfigError, Result};
pub use types::*;

/// Trait for config validation
pub use validation::Validate;
