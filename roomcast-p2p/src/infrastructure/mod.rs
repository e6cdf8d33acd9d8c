pub mod error;
pub mod signaling;

#[cfg(feature = "matchbox")]
pub mod matchbox;

pub use error::{Result, SignalingError};
pub use signaling::{HandleEvent, SignalingHandle, SignalingTransport};
