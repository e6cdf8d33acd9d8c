use crate::domain::PeerId;
use crate::infrastructure::error::Result;

/// Lifecycle notifications emitted by a signaling handle, in delivery order.
#[derive(Debug, Clone, PartialEq)]
pub enum HandleEvent {
    /// The transport confirmed readiness and bound an identity.
    Open(PeerId),
    /// The signaling link dropped.
    Disconnected,
    /// The handle was closed remotely.
    Closed,
    /// The transport reported a failure; the description is opaque.
    Error(String),
}

/// Boundary to the signaling transport: opens handles bound to an identity.
pub trait SignalingTransport {
    /// Open a new handle, asking the transport to bind `requested`.
    ///
    /// The transport may assign a different identity; the bound value arrives
    /// later in [`HandleEvent::Open`].
    fn open(&mut self, requested: &PeerId) -> Result<Box<dyn SignalingHandle>>;
}

/// A live signaling handle (allows mocking in tests).
///
/// Exclusively owned by one lifecycle manager. `disconnect` and `destroy`
/// are idempotent teardown operations; the manager calls both during
/// release.
pub trait SignalingHandle {
    /// Drain pending lifecycle events.
    fn poll_events(&mut self) -> Vec<HandleEvent>;

    fn disconnect(&mut self);

    fn destroy(&mut self);
}
