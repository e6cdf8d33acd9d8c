use crate::domain::{PeerId, PeerStatus};

/// Lifecycle notifications surfaced by `PeerLifecycleManager::pump`.
///
/// Terminal variants report the transient status observed at the moment of
/// the event; by the time the caller reads them the manager has already
/// released the handle and settled back to idle.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent {
    /// The handle confirmed readiness and the identity is bound.
    Opened(PeerId),
    /// The signaling link dropped; the handle has been released.
    Disconnected,
    /// The handle was closed remotely; it has been released.
    Closed,
    /// The transport reported a failure. The opaque description is passed
    /// through unchanged; the handle has been released.
    Failed(String),
}

impl LifecycleEvent {
    /// The status value this event reports.
    pub fn status(&self) -> PeerStatus {
        match self {
            LifecycleEvent::Opened(_) => PeerStatus::Open,
            LifecycleEvent::Disconnected => PeerStatus::Disconnected,
            LifecycleEvent::Closed => PeerStatus::Closed,
            LifecycleEvent::Failed(_) => PeerStatus::Error,
        }
    }
}
