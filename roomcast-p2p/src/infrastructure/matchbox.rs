use crate::domain::PeerId;
use crate::infrastructure::error::Result;
use crate::infrastructure::signaling::{HandleEvent, SignalingHandle, SignalingTransport};
use matchbox_socket::WebRtcSocket;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Configuration for the Matchbox signaling transport.
#[derive(Debug, Clone)]
pub struct SignalingConfig {
    /// Matchbox signaling server URL, including the room path.
    pub signaling_url: String,
}

impl Default for SignalingConfig {
    fn default() -> Self {
        Self {
            signaling_url: "wss://matchbox.roomcast.app/lobby".to_string(),
        }
    }
}

impl SignalingConfig {
    pub fn new(signaling_url: impl Into<String>) -> Self {
        Self {
            signaling_url: signaling_url.into(),
        }
    }
}

/// Infrastructure adapter: signaling handles over a Matchbox server.
///
/// Matchbox assigns peer ids server-side, so a requested identity cannot be
/// bound; it is logged and the server-assigned id is surfaced through
/// [`HandleEvent::Open`] instead.
///
/// On native targets the socket's message loop is spawned onto the ambient
/// tokio runtime, so `open` must be called from within one.
pub struct MatchboxTransport {
    config: SignalingConfig,
}

impl MatchboxTransport {
    pub fn new(config: SignalingConfig) -> Self {
        Self { config }
    }
}

impl SignalingTransport for MatchboxTransport {
    fn open(&mut self, requested: &PeerId) -> Result<Box<dyn SignalingHandle>> {
        tracing::info!(
            "Opening Matchbox handle against {} (requested identity {} is replaced by the server-assigned id)",
            self.config.signaling_url,
            requested
        );

        let (socket, loop_fut) = WebRtcSocket::new_reliable(self.config.signaling_url.as_str());

        let loop_done = Arc::new(AtomicBool::new(false));
        let loop_error: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

        let done = loop_done.clone();
        let error = loop_error.clone();
        let message_loop = async move {
            if let Err(e) = loop_fut.await {
                *error.lock().unwrap() = Some(e.to_string());
            }
            done.store(true, Ordering::SeqCst);
        };

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(message_loop);

        #[cfg(not(target_arch = "wasm32"))]
        {
            #[cfg(feature = "native")]
            tokio::spawn(message_loop);

            #[cfg(not(feature = "native"))]
            compile_error!("Non-WASM builds require the 'native' feature to be enabled");
        }

        Ok(Box::new(MatchboxHandle {
            socket: Some(socket),
            announced: false,
            loop_done,
            loop_error,
        }))
    }
}

/// Handle over a live Matchbox socket.
struct MatchboxHandle {
    socket: Option<WebRtcSocket>,
    announced: bool,
    loop_done: Arc<AtomicBool>,
    loop_error: Arc<Mutex<Option<String>>>,
}

impl SignalingHandle for MatchboxHandle {
    fn poll_events(&mut self) -> Vec<HandleEvent> {
        let mut events = Vec::new();

        if self.socket.is_none() {
            return events;
        }

        // The message loop finishing means the signaling link is gone and
        // the socket is unusable from here on.
        if self.loop_done.load(Ordering::SeqCst) {
            self.socket = None;
            let event = match self.loop_error.lock().unwrap().take() {
                Some(description) => HandleEvent::Error(description),
                None => HandleEvent::Closed,
            };
            events.push(event);
            return events;
        }

        if let Some(socket) = self.socket.as_mut() {
            if !self.announced {
                if let Some(id) = socket.id() {
                    self.announced = true;
                    tracing::info!("Matchbox assigned peer id {}", id);
                    events.push(HandleEvent::Open(PeerId::new(id.to_string())));
                }
            }

            // Keep the peer bookkeeping moving; peer-level connections are
            // handed off through the open callback, not supervised here.
            for (peer, state) in socket.update_peers() {
                match state {
                    matchbox_socket::PeerState::Connected => {
                        tracing::debug!("Peer connected: {}", peer);
                    }
                    matchbox_socket::PeerState::Disconnected => {
                        tracing::debug!("Peer disconnected: {}", peer);
                    }
                }
            }
        }

        events
    }

    fn disconnect(&mut self) {
        // Matchbox has no separate disconnect notion; dropping the socket in
        // `destroy` tears the signaling link down.
        tracing::debug!("Matchbox handle disconnect requested");
    }

    fn destroy(&mut self) {
        if self.socket.take().is_some() {
            tracing::debug!("Matchbox socket dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_public_server() {
        let config = SignalingConfig::default();

        assert!(config.signaling_url.starts_with("wss://"));
    }

    #[test]
    fn test_config_takes_custom_url() {
        let config = SignalingConfig::new("ws://localhost:3536/room-1");

        assert_eq!(config.signaling_url, "ws://localhost:3536/room-1");
    }
}
