use crate::domain::PeerId;
use crate::infrastructure::signaling::SignalingHandle;

/// Callback invoked once, synchronously, when the handle reaches open.
///
/// Receives the bound identity and the live handle so the caller can attach
/// further behavior to it, e.g. incoming-connection acceptance. This is the
/// only place the handle surfaces outside the manager.
pub type OnOpen = Box<dyn FnOnce(&PeerId, &mut dyn SignalingHandle)>;

/// Configuration for a single activation.
#[derive(Default)]
pub struct ActivateConfig {
    /// Identity to ask the transport to bind; freshly generated when absent.
    pub requested_identity: Option<PeerId>,
    /// Invoked exactly once when the handle confirms readiness.
    pub on_open: Option<OnOpen>,
}

impl ActivateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(mut self, identity: PeerId) -> Self {
        self.requested_identity = Some(identity);
        self
    }

    pub fn with_on_open(
        mut self,
        on_open: impl FnOnce(&PeerId, &mut dyn SignalingHandle) + 'static,
    ) -> Self {
        self.on_open = Some(Box::new(on_open));
        self
    }
}
