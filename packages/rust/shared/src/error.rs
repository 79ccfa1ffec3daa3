//! Error types for SiteCrumbs.
//!
//! Library crates use [`SiteCrumbsError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Breadcrumb generation itself never fails; these errors come from the
//! configuration and output layers around it.

use std::path::PathBuf;

/// Top-level error type for all SiteCrumbs operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteCrumbsError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input validation error (malformed base URL, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// JSON / JSON-LD serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SiteCrumbsError>;

impl SiteCrumbsError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for SiteCrumbsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = SiteCrumbsError::config("missing base URL");
        assert_eq!(err.to_string(), "config error: missing base URL");

        let err = SiteCrumbsError::validation("base URL must use http or https");
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn io_error_keeps_path() {
        let err = SiteCrumbsError::io(
            "/tmp/sitecrumbs.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("sitecrumbs.toml"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn serde_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SiteCrumbsError = json_err.into();
        assert!(err.to_string().starts_with("serialization error:"));
    }
}
