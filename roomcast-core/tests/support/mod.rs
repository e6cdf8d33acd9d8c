use roomcast_core::{RoomRecord, RoomStore, StoreError};

/// In-memory room store that keeps created records as JSON documents,
/// the same shape the external document store would hold.
#[derive(Default)]
pub struct InMemoryRoomStore {
    pub documents: Vec<serde_json::Value>,
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoomStore for InMemoryRoomStore {
    fn create(&mut self, record: &RoomRecord) -> Result<(), StoreError> {
        let document =
            serde_json::to_value(record).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        self.documents.push(document);
        Ok(())
    }
}

/// Store whose writes always fail, for exercising propagation.
pub struct FailingRoomStore {
    pub attempts: usize,
}

impl FailingRoomStore {
    pub fn new() -> Self {
        Self { attempts: 0 }
    }
}

impl RoomStore for FailingRoomStore {
    fn create(&mut self, _record: &RoomRecord) -> Result<(), StoreError> {
        self.attempts += 1;
        Err(StoreError::WriteFailed("permission denied".to_string()))
    }
}
