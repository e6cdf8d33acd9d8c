mod create_room;
mod directory;
mod store;

pub use create_room::{create_room, CreateRoomRequest, ValidationError, MIN_NAME_CHARS};
pub use directory::RoomDirectory;
pub use store::{RoomStore, StoreError};
