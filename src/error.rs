use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::terraform::StateError;

/// How a failure is reported to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Network,
    Unexpected,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Usage => 2,
            ErrorKind::Network | ErrorKind::Unexpected => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum CasedError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CasedError {
    pub fn usage(message: impl Into<String>) -> Self {
        CasedError::Usage(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CasedError::Usage(_) | CasedError::Config(_) => ErrorKind::Usage,
            CasedError::State(err) => match err {
                StateError::Spawn { .. } => ErrorKind::Unexpected,
                _ => ErrorKind::Usage,
            },
            CasedError::Api(err) => match err {
                ApiError::Network(_) => ErrorKind::Network,
                _ => ErrorKind::Usage,
            },
            CasedError::Io(_) => ErrorKind::Unexpected,
        }
    }
}

/// Formats `err` followed by each cause in its source chain. Causes whose
/// text is already part of the message are skipped.
pub fn display_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
