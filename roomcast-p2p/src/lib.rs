// Domain layer (core)
pub mod domain;

// Application layer (use cases)
pub mod application;

// Infrastructure layer (adapters)
pub mod infrastructure;

// Re-exports for convenience
pub use application::{ActivateConfig, LifecycleEvent, OnOpen, PeerLifecycleManager};
pub use domain::{PeerId, PeerStatus};
pub use infrastructure::error::{Result, SignalingError};
pub use infrastructure::signaling::{HandleEvent, SignalingHandle, SignalingTransport};

#[cfg(feature = "matchbox")]
pub use infrastructure::matchbox::{MatchboxTransport, SignalingConfig};
