//! Shared error type across tumocc crates.

use thiserror::Error;

/// Stable error kinds, used as the `kind` field in operational logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Outbound request could not be built.
    Request,
    /// Connection, TLS or timeout failure talking to the upstream.
    Transport,
    /// Upstream body is not a usable occupancy response.
    Decode,
    /// Invalid or unreadable configuration.
    Config,
    /// Listener bind or serve failure.
    Bind,
}

impl ErrorKind {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Request => "REQUEST",
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::Decode => "DECODE",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Bind => "BIND",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TumOccError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum TumOccError {
    #[error("request error: {0}")]
    Request(String),
    #[error("http error: {message}")]
    Transport { message: String, timeout: bool },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("bind error: {0}")]
    Bind(String),
}

impl TumOccError {
    /// Map an error to its stable kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TumOccError::Request(_) => ErrorKind::Request,
            TumOccError::Transport { .. } => ErrorKind::Transport,
            TumOccError::Decode(_) => ErrorKind::Decode,
            TumOccError::Config(_) => ErrorKind::Config,
            TumOccError::Bind(_) => ErrorKind::Bind,
        }
    }

    /// True when the upstream round trip hit its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TumOccError::Transport { timeout: true, .. })
    }
}
