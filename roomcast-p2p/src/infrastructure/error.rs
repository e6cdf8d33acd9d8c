/// Infrastructure layer errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SignalingError {
    /// Opaque failure reported by the underlying transport, passed through
    /// unchanged; not recoverable here.
    #[error("Transport error: {0}")]
    Transport(String),

    /// `activate` was called while a prior activation is still pending.
    #[error("Activation already in progress")]
    AlreadyActivating,
}

pub type Result<T> = std::result::Result<T, SignalingError>;
