/// Connectivity-level failure reported by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// The response body could not be decoded into the requested type.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(#[from] pub serde_json::Error);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid target: empty")]
pub struct InvalidTarget;

/// Everything that can end a load in `Failure`.
///
/// The `Display` output is exactly the message published to the sink.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidTarget(#[from] InvalidTarget),
}
