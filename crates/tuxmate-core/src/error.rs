//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
///
/// Nothing in the selection or generation path returns one of these: those
/// operations are total. Errors only come from loading data and from the
/// presentation edge (terminal, clipboard, script files).
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Catalog Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Catalog file not found: {path}")]
    CatalogNotFound { path: PathBuf },

    #[error("Invalid catalog: {message}")]
    CatalogInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Presentation Edge Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Clipboard unavailable: {message}")]
    Clipboard { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn catalog_invalid(message: impl Into<String>) -> Self {
        Self::CatalogInvalid {
            message: message.into(),
        }
    }

    pub fn catalog_not_found(path: impl Into<PathBuf>) -> Self {
        Self::CatalogNotFound { path: path.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    /// Check if this error should stop the application before the UI starts
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::CatalogNotFound { .. }
                | Error::CatalogInvalid { .. }
                | Error::Toml(_)
                | Error::Json(_)
                | Error::Terminal { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::catalog_invalid("duplicate app id 'vim'");
        assert_eq!(err.to_string(), "Invalid catalog: duplicate app id 'vim'");

        let err = Error::clipboard("no display");
        assert!(err.to_string().contains("Clipboard unavailable"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not valid {{");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Toml(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::catalog_invalid("bad").is_fatal());
        assert!(Error::catalog_not_found("/nope.toml").is_fatal());
        assert!(!Error::clipboard("no display").is_fatal());
        assert!(!Error::config("bad value").is_fatal());
    }

    #[test]
    fn test_catalog_not_found_mentions_path() {
        let err = Error::catalog_not_found("/tmp/catalog.toml");
        assert!(err.to_string().contains("/tmp/catalog.toml"));
    }

    #[test]
    fn test_context_preserves_error_kind() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let result = io.context("writing script");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
