mod config;
mod events;
mod manager;

pub use config::{ActivateConfig, OnOpen};
pub use events::LifecycleEvent;
pub use manager::PeerLifecycleManager;
