//! Error types for the shell.

use thiserror::Error;

/// Result type for navigation operations.
pub type NavResult<T> = Result<T, NavError>;

/// Errors raised by the navigator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// No factory is registered under this screen name.
    #[error("screen '{0}' is not registered")]
    UnregisteredScreen(String),
}
