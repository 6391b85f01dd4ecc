//! Configuration error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} config: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("unsupported config format: {path}")]
    UnsupportedFormat { path: String },

    #[error("invalid value for {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be greater than {min}, got {value}")]
    InvalidInteger {
        field: String,
        value: usize,
        min: usize,
    },
}
