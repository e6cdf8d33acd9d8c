use roomcast_p2p::{
    ActivateConfig, LifecycleEvent, MatchboxTransport, PeerLifecycleManager, PeerStatus,
    SignalingConfig,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let signaling_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SignalingConfig::default().signaling_url);

    let transport = MatchboxTransport::new(SignalingConfig::new(signaling_url));
    let mut manager = PeerLifecycleManager::new(transport);

    manager.activate(ActivateConfig::new().with_on_open(|identity, _handle| {
        println!("Handle open, identity {}", identity);
    }))?;

    // Main event loop: pump until a terminal event settles us back to idle.
    let mut interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        interval.tick().await;

        for event in manager.pump() {
            match event {
                LifecycleEvent::Opened(identity) => println!("Session open as {}", identity),
                LifecycleEvent::Disconnected => println!("Signaling link dropped"),
                LifecycleEvent::Closed => println!("Handle closed remotely"),
                LifecycleEvent::Failed(description) => println!("Failed: {}", description),
            }
        }

        if manager.status() == PeerStatus::Idle {
            break;
        }
    }

    Ok(())
}
