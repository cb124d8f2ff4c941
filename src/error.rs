//! Crate error type.
//!
//! Feature initializers never fail: a missing element only disables that
//! feature. Errors are reserved for configuration, startup, and host-level
//! failures surfaced at the wasm boundary.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("page config has no title labels")]
    EmptyTitles,
    #[error("unknown log level: {0}")]
    LogLevel(String),
    #[error("no browser window or document available")]
    NoDocument,
    #[error("page controller already started")]
    AlreadyStarted,
    #[error("host error: {0}")]
    Host(String),
}

impl PageError {
    /// Stable machine-readable code, logged alongside the message.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E_CONFIG",
            Self::EmptyTitles => "E_EMPTY_TITLES",
            Self::LogLevel(_) => "E_LOG_LEVEL",
            Self::NoDocument => "E_NO_DOCUMENT",
            Self::AlreadyStarted => "E_ALREADY_STARTED",
            Self::Host(_) => "E_HOST",
        }
    }
}
