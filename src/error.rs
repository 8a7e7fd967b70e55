use thiserror::Error;

/// Result type used by every library operation.
pub type RouteResult<T> = Result<T, RouteError>;

/// Errors surfaced synchronously to the caller. Nothing is clamped or retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Bad location count, degenerate bounds or an under-sized collection.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value could not be interpreted.
    #[error("invalid configuration value '{value}' for {key}: {reason}")]
    Config {
        key: String,
        value: String,
        reason: String,
    },
}

impl RouteError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RouteError::InvalidArgument(message.into())
    }
}
