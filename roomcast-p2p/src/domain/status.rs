use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection status of the supervised signaling handle.
///
/// `Disconnected`, `Closed` and `Error` are transient: they are observable in
/// the lifecycle event emitted at the terminal transition, after which the
/// manager has already released the handle and settled back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeerStatus {
    /// No handle; ready for activation.
    Idle,
    /// A handle was opened and its confirmation event is awaited.
    Pending,
    /// The handle confirmed readiness; the identity is bound.
    Open,
    /// The signaling link dropped.
    Disconnected,
    /// The handle was closed remotely.
    Closed,
    /// The transport reported a failure.
    Error,
}

impl PeerStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, PeerStatus::Open)
    }
}

impl fmt::Display for PeerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            PeerStatus::Idle => "idle",
            PeerStatus::Pending => "pending",
            PeerStatus::Open => "open",
            PeerStatus::Disconnected => "disconnected",
            PeerStatus::Closed => "closed",
            PeerStatus::Error => "error",
        };
        write!(f, "{}", status)
    }
}
