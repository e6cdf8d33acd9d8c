pub mod application;
pub mod domain;

pub use application::{
    create_room, CreateRoomRequest, RoomDirectory, RoomStore, StoreError, ValidationError,
    MIN_NAME_CHARS,
};
pub use domain::{
    generate_id, live_rooms, LivenessWindow, RoomId, RoomRecord, Timestamp,
    DEFAULT_LIVENESS_THRESHOLD_SECS,
};
