use crate::domain::RoomRecord;

/// Errors from the external room store boundary.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Store write failed: {0}")]
    WriteFailed(String),
}

/// Write side of the external room store (allows mocking in tests).
///
/// The read side is a live feed of whole-collection snapshots, consumed
/// through [`RoomDirectory::apply_snapshot`](crate::RoomDirectory::apply_snapshot).
pub trait RoomStore {
    /// Register a new room document.
    fn create(&mut self, record: &RoomRecord) -> Result<(), StoreError>;
}
