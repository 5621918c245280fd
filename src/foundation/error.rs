/// Result alias used throughout the crate.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors produced by the quiz video pipeline.
///
/// Every variant except [`QuizError::DataShape`] is fatal to the current run.
#[derive(thiserror::Error, Debug)]
pub enum QuizError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("media probe error: {0}")]
    MediaProbe(String),

    #[error("composition error: {message}")]
    Composition {
        message: String,
        /// Encoder diagnostic output (stderr), possibly empty.
        diagnostics: String,
    },

    #[error("data shape error: {0}")]
    DataShape(String),

    #[error("service error: {0}")]
    Service(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuizError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn media_probe(msg: impl Into<String>) -> Self {
        Self::MediaProbe(msg.into())
    }

    pub fn composition(msg: impl Into<String>, diagnostics: impl Into<String>) -> Self {
        Self::Composition {
            message: msg.into(),
            diagnostics: diagnostics.into(),
        }
    }

    pub fn data_shape(msg: impl Into<String>) -> Self {
        Self::DataShape(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    /// Encoder stderr attached to a composition failure.
    pub fn diagnostics(&self) -> Option<&str> {
        match self {
            Self::Composition { diagnostics, .. } => Some(diagnostics.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
