pub mod identity;
pub mod presence;
pub mod room;

pub use identity::generate_id;
pub use presence::{live_rooms, LivenessWindow, DEFAULT_LIVENESS_THRESHOLD_SECS};
pub use room::{RoomId, RoomRecord, Timestamp};
