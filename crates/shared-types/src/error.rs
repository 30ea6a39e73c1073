use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The embedded configuration could not be parsed.
    InvalidConfig,
    /// Browser storage is missing or rejected a read/write.
    StorageUnavailable,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            AppErrorKind::StorageUnavailable => write!(f, "StorageUnavailable"),
        }
    }
}

/// Structured application error.
///
/// Nothing in the dashboard shows errors to the user. These values are
/// produced at the edges (config parsing, browser storage), logged, and
/// then replaced by a default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidConfig,
            message: message.into(),
        }
    }

    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::StorageUnavailable,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::invalid_config(err.message().to_string())
    }
}
