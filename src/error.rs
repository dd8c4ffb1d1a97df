//! Error types for the site header

use thiserror::Error;

/// Failures raised by the browser bridge while handling a header action.
///
/// None of these reach the user: handlers log them and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Section '{0}' not found on page")]
    SectionNotFound(String),

    #[error("No browser window available")]
    NoWindow,

    #[error("No document attached to the window")]
    NoDocument,

    #[error("Browser refused to open '{0}' (popup blocked?)")]
    PopupBlocked(String),

    #[error("{0} is only available in a browser")]
    Unsupported(&'static str),
}

/// Problems found while loading or validating the site configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse site configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Menu must contain at least one item")]
    EmptyMenu,

    #[error("Section id '{0}' is used by more than one menu item")]
    DuplicateSection(String),

    #[error("Invalid external URL '{0}' (expected http or https)")]
    InvalidUrl(String),
}

/// Result type for browser-bridge operations
pub type NavResult<T> = Result<T, NavError>;
