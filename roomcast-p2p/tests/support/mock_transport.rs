use roomcast_p2p::{
    HandleEvent, PeerId, Result, SignalingError, SignalingHandle, SignalingTransport,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// State shared between a scripted transport and the handles it opens.
#[derive(Default)]
struct TransportState {
    open_calls: usize,
    requested: Vec<PeerId>,
    queued: VecDeque<HandleEvent>,
    disconnect_calls: usize,
    destroy_calls: usize,
    fail_next_open: Option<String>,
}

/// Scripted in-memory transport: events queued here are drained by the
/// opened handle's `poll_events`, simulating the asynchronous notifications
/// a real signaling transport would deliver.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<TransportState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the handle to deliver on its next poll.
    pub fn queue(&self, event: HandleEvent) {
        self.state.lock().unwrap().queued.push_back(event);
    }

    /// Make the next `open` call fail with a transport error.
    pub fn fail_next_open(&self, description: &str) {
        self.state.lock().unwrap().fail_next_open = Some(description.to_string());
    }

    pub fn open_calls(&self) -> usize {
        self.state.lock().unwrap().open_calls
    }

    pub fn last_requested(&self) -> Option<PeerId> {
        self.state.lock().unwrap().requested.last().cloned()
    }

    pub fn disconnect_calls(&self) -> usize {
        self.state.lock().unwrap().disconnect_calls
    }

    pub fn destroy_calls(&self) -> usize {
        self.state.lock().unwrap().destroy_calls
    }
}

impl SignalingTransport for MockTransport {
    fn open(&mut self, requested: &PeerId) -> Result<Box<dyn SignalingHandle>> {
        let mut state = self.state.lock().unwrap();
        state.open_calls += 1;
        state.requested.push(requested.clone());

        if let Some(description) = state.fail_next_open.take() {
            return Err(SignalingError::Transport(description));
        }

        Ok(Box::new(MockHandle {
            state: self.state.clone(),
        }))
    }
}

struct MockHandle {
    state: Arc<Mutex<TransportState>>,
}

impl SignalingHandle for MockHandle {
    fn poll_events(&mut self) -> Vec<HandleEvent> {
        self.state.lock().unwrap().queued.drain(..).collect()
    }

    fn disconnect(&mut self) {
        self.state.lock().unwrap().disconnect_calls += 1;
    }

    fn destroy(&mut self) {
        self.state.lock().unwrap().destroy_calls += 1;
    }
}
