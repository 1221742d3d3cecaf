//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Preference Persistence Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Preference store unavailable: {message}")]
    PreferenceUnavailable { message: String },

    #[error("Failed to write preference: {message}")]
    PreferenceWrite { message: String },

    // ─────────────────────────────────────────────────────────────
    // Navigation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown route: {route}")]
    UnknownRoute { route: String },

    #[error("Duplicate category id: {id}")]
    DuplicateCategory { id: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn preference_unavailable(message: impl Into<String>) -> Self {
        Self::PreferenceUnavailable {
            message: message.into(),
        }
    }

    pub fn preference_write(message: impl Into<String>) -> Self {
        Self::PreferenceWrite {
            message: message.into(),
        }
    }

    pub fn unknown_route(route: impl Into<String>) -> Self {
        Self::UnknownRoute {
            route: route.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Persistence and configuration problems degrade to defaults; the
    /// sidebar keeps rendering (non-persisted, non-configured) instead of
    /// failing.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::ConfigNotFound { .. }
                | Error::ConfigInvalid { .. }
                | Error::PreferenceUnavailable { .. }
                | Error::PreferenceWrite { .. }
                | Error::Toml(_)
                | Error::UnknownRoute { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::TerminalRestore(_))
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
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
