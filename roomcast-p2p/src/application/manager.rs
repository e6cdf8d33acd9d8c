use crate::application::config::{ActivateConfig, OnOpen};
use crate::application::events::LifecycleEvent;
use crate::domain::{PeerId, PeerStatus};
use crate::infrastructure::error::{Result, SignalingError};
use crate::infrastructure::signaling::{HandleEvent, SignalingHandle, SignalingTransport};

/// Supervises exactly one signaling handle behind a small state machine.
///
/// ```text
/// idle --activate--> pending --open event--> open
/// open --disconnected|close event--> released, back to idle
/// pending|open --error event--> released, back to idle
/// any --deactivate--> idle (handle released if present)
/// ```
///
/// `open` is only reachable through the handle's confirmation event. A
/// terminal event releases the handle synchronously inside the dispatcher,
/// so the handle is released exactly once per activation, never leaked and
/// never double-released; dropping the manager takes the same release path.
pub struct PeerLifecycleManager<T: SignalingTransport> {
    transport: T,
    handle: Option<Box<dyn SignalingHandle>>,
    status: PeerStatus,
    identity: Option<PeerId>,
    on_open: Option<OnOpen>,
}

impl<T: SignalingTransport> PeerLifecycleManager<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            handle: None,
            status: PeerStatus::Idle,
            identity: None,
            on_open: None,
        }
    }

    /// Current status. Never reports a terminal value: those are transient
    /// and surfaced through [`LifecycleEvent`]s instead.
    pub fn status(&self) -> PeerStatus {
        self.status
    }

    /// The bound identity; `Some` exactly while the status is `Open`.
    pub fn identity(&self) -> Option<&PeerId> {
        self.identity.as_ref()
    }

    /// Open a handle and start waiting for its confirmation event.
    ///
    /// Does not block; readiness arrives later through [`pump`](Self::pump).
    /// A no-op while already open (the existing handle is reused); rejected
    /// while a prior activation is still pending.
    pub fn activate(&mut self, config: ActivateConfig) -> Result<()> {
        match self.status {
            PeerStatus::Open => {
                tracing::debug!("Already open, reusing existing handle");
                return Ok(());
            }
            PeerStatus::Pending => return Err(SignalingError::AlreadyActivating),
            _ => {}
        }

        let requested = config.requested_identity.unwrap_or_else(PeerId::generate);

        tracing::info!("Activating with requested identity {}", requested);

        let handle = self.transport.open(&requested)?;
        self.handle = Some(handle);
        self.on_open = config.on_open;
        self.status = PeerStatus::Pending;

        Ok(())
    }

    /// Drive the state machine: drain the handle's pending events and fold
    /// them through the transitions, returning the notifications observed.
    ///
    /// Call this regularly from the host's event loop. A terminal event
    /// releases the handle before this returns; events still queued behind
    /// it belonged to the released handle and are dropped.
    pub fn pump(&mut self) -> Vec<LifecycleEvent> {
        let mut notifications = Vec::new();

        let events = match self.handle.as_mut() {
            Some(handle) => handle.poll_events(),
            None => return notifications,
        };

        for event in events {
            match event {
                HandleEvent::Open(assigned) => {
                    if self.status != PeerStatus::Pending {
                        tracing::warn!("Ignoring open event while {}", self.status);
                        continue;
                    }
                    tracing::info!("Handle open, identity {}", assigned);
                    self.status = PeerStatus::Open;
                    self.identity = Some(assigned.clone());
                    if let (Some(on_open), Some(handle)) =
                        (self.on_open.take(), self.handle.as_mut())
                    {
                        on_open(&assigned, handle.as_mut());
                    }
                    notifications.push(LifecycleEvent::Opened(assigned));
                }
                HandleEvent::Disconnected => {
                    tracing::info!("Handle disconnected");
                    notifications.push(LifecycleEvent::Disconnected);
                    self.release();
                    break;
                }
                HandleEvent::Closed => {
                    tracing::info!("Handle closed remotely");
                    notifications.push(LifecycleEvent::Closed);
                    self.release();
                    break;
                }
                HandleEvent::Error(description) => {
                    tracing::warn!("Handle error: {}", description);
                    notifications.push(LifecycleEvent::Failed(description));
                    self.release();
                    break;
                }
            }
        }

        notifications
    }

    /// Release the handle, if any, and settle back to idle.
    ///
    /// Idempotent; also acts as cancellation when called while an activation
    /// is still pending.
    pub fn deactivate(&mut self) {
        if self.handle.is_none() {
            return;
        }
        tracing::info!("Deactivating");
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.disconnect();
            handle.destroy();
        }
        self.identity = None;
        self.on_open = None;
        self.status = PeerStatus::Idle;
    }
}

impl<T: SignalingTransport> Drop for PeerLifecycleManager<T> {
    fn drop(&mut self) {
        self.release();
    }
}
