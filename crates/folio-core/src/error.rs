pub type FxResult<T> = Result<T, FxError>;

/// Environmental failures. None of these reach the end user: callers log
/// them and skip the affected effect for the current cycle.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FxError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("invalid value for `{key}`: {value:?}")]
    InvalidConfig { key: String, value: String },
}

impl FxError {
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement(what.into())
    }

    pub fn invalid(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }
}
