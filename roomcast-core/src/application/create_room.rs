use crate::application::store::{RoomStore, StoreError};
use crate::domain::{RoomId, RoomRecord};

/// Minimum length of room and user names after trimming whitespace.
pub const MIN_NAME_CHARS: usize = 3;

/// Errors from checking room-creation fields.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters")]
    NameTooShort { field: &'static str, min: usize },
}

/// Fields for registering a new room.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRoomRequest {
    pub room_name: String,
    pub user_name: String,
}

impl CreateRoomRequest {
    pub fn new(room_name: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            room_name: room_name.into(),
            user_name: user_name.into(),
        }
    }

    /// Check the minimum-length rule on both fields.
    ///
    /// Callers run this before [`create_room`]; the flow itself assumes
    /// valid input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort {
                field: "user name",
                min: MIN_NAME_CHARS,
            });
        }
        if self.room_name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort {
                field: "room name",
                min: MIN_NAME_CHARS,
            });
        }
        Ok(())
    }
}

/// Register a new room and return its freshly generated id.
///
/// Performs exactly one store write; the new record carries no liveness
/// timestamp until the host's first ping. A failed write propagates
/// unchanged and no id is considered assigned.
pub fn create_room<S: RoomStore>(
    store: &mut S,
    request: CreateRoomRequest,
) -> Result<RoomId, StoreError> {
    let room_id = RoomId::new();
    let record = RoomRecord::new(room_id.clone(), request.room_name, request.user_name);

    tracing::info!("Registering room {} ({})", record.room_name, room_id);
    store.create(&record)?;

    Ok(room_id)
}
