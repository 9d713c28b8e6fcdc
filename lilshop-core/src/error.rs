/// Structured error types for lilshop-core library.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (lilshop-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lilshop-core operations
#[derive(Error, Debug)]
pub enum ShopError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration file missing
    #[error("Config not found at {path:?}\n\nRun: lilshop config init")]
    ConfigMissing { path: PathBuf },

    /// Configuration parsing or serialization failed
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Bind address could not be parsed
    #[error("Invalid bind address '{value}': {reason}")]
    InvalidBindAddr { value: String, reason: String },
}

/// Result type alias for lilshop-core operations
pub type Result<T> = std::result::Result<T, ShopError>;

impl ShopError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create an invalid bind address error
    pub fn invalid_bind_addr(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBindAddr {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShopError::config("invalid TOML");
        assert_eq!(err.to_string(), "Configuration error: invalid TOML");

        let err = ShopError::invalid_bind_addr("localhost:99999", "port out of range");
        assert!(err.to_string().contains("localhost:99999"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let shop_err: ShopError = io_err.into();

        assert!(matches!(shop_err, ShopError::Io { .. }));
    }
}
