use crate::domain::{live_rooms, LivenessWindow, RoomRecord, Timestamp};

/// Holds the latest snapshot of the room collection from the store's live feed.
///
/// The feed always yields the full current collection, so updates replace the
/// snapshot wholesale; liveness is recomputed per query rather than tracked
/// incrementally.
#[derive(Debug, Default)]
pub struct RoomDirectory {
    records: Vec<RoomRecord>,
    window: LivenessWindow,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(window: LivenessWindow) -> Self {
        Self {
            records: Vec::new(),
            window,
        }
    }

    /// Replace the snapshot with the latest collection from the feed.
    pub fn apply_snapshot(&mut self, records: Vec<RoomRecord>) {
        tracing::debug!("Room snapshot updated: {} records", records.len());
        self.records = records;
    }

    /// All records in the current snapshot.
    pub fn records(&self) -> &[RoomRecord] {
        &self.records
    }

    /// The rooms considered live at `now`.
    pub fn live(&self, now: Timestamp) -> Vec<RoomRecord> {
        live_rooms(&self.records, now, self.window)
    }
}
