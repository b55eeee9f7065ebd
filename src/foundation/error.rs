/// Result alias used across the crate.
pub type PageResult<T> = Result<T, PageError>;

/// Errors raised at the crate boundaries (config, scripts, rendering, IO).
///
/// Page interaction itself never fails: missing elements and unusable input are no-ops.
#[derive(thiserror::Error, Debug)]
pub enum PageError {
    /// Invalid user-supplied value (form field, script event, range).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid page configuration.
    #[error("config error: {0}")]
    Config(String),

    /// SVG/PNG rendering failure.
    #[error("render error: {0}")]
    Render(String),

    /// JSON encoding/decoding failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PageError {
    /// Build a [`PageError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PageError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PageError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PageError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
