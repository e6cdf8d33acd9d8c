use crate::domain::room::{RoomRecord, Timestamp};

/// Default freshness window in seconds.
pub const DEFAULT_LIVENESS_THRESHOLD_SECS: f64 = 30.0;

/// Freshness window within which a liveness timestamp counts as live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LivenessWindow {
    pub threshold_secs: f64,
}

impl LivenessWindow {
    pub fn new(threshold_secs: f64) -> Self {
        Self { threshold_secs }
    }

    /// Whether a liveness timestamp is fresh at `now`.
    ///
    /// A missing timestamp is never live.
    pub fn is_live(&self, last_liveness: Option<Timestamp>, now: Timestamp) -> bool {
        match last_liveness {
            Some(at) => now.seconds_since(at) <= self.threshold_secs,
            None => false,
        }
    }
}

impl Default for LivenessWindow {
    fn default() -> Self {
        Self {
            threshold_secs: DEFAULT_LIVENESS_THRESHOLD_SECS,
        }
    }
}

/// The subset of `records` that are live at `now`.
///
/// Stable filter: output preserves the relative order of the input. Pure and
/// stateless, so it is recomputed per snapshot and safe to call from
/// concurrent readers.
pub fn live_rooms(
    records: &[RoomRecord],
    now: Timestamp,
    window: LivenessWindow,
) -> Vec<RoomRecord> {
    records
        .iter()
        .filter(|record| window.is_live(record.last_liveness, now))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::room::RoomId;

    fn record(name: &str, last_liveness: Option<f64>) -> RoomRecord {
        let mut record = RoomRecord::new(RoomId::new(), name, "host");
        record.last_liveness = last_liveness.map(Timestamp::from_secs);
        record
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let now = Timestamp::from_secs(1000.0);

        assert!(live_rooms(&[], now, LivenessWindow::default()).is_empty());
    }

    #[test]
    fn test_recent_ping_is_live() {
        let now = Timestamp::from_secs(1000.0);
        let records = vec![record("fresh", Some(990.0))];

        let live = live_rooms(&records, now, LivenessWindow::default());

        assert_eq!(live.len(), 1);
    }

    #[test]
    fn test_stale_ping_is_excluded() {
        let now = Timestamp::from_secs(1000.0);
        let records = vec![record("stale", Some(969.0))];

        assert!(live_rooms(&records, now, LivenessWindow::default()).is_empty());
    }

    #[test]
    fn test_ping_exactly_on_threshold_is_live() {
        let now = Timestamp::from_secs(1000.0);
        let records = vec![record("edge", Some(970.0))];

        let live = live_rooms(&records, now, LivenessWindow::default());

        assert_eq!(live.len(), 1);
    }

    #[test]
    fn test_record_without_ping_is_never_live() {
        let now = Timestamp::from_secs(1000.0);
        let records = vec![record("silent", None)];

        assert!(live_rooms(&records, now, LivenessWindow::default()).is_empty());
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let now = Timestamp::from_secs(1000.0);
        let records = vec![
            record("a", Some(995.0)),
            record("b", Some(900.0)),
            record("c", Some(999.0)),
        ];

        let live = live_rooms(&records, now, LivenessWindow::default());

        let names: Vec<&str> = live.iter().map(|r| r.room_name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_custom_window() {
        let now = Timestamp::from_secs(1000.0);
        let records = vec![record("old", Some(900.0))];

        let live = live_rooms(&records, now, LivenessWindow::new(120.0));

        assert_eq!(live.len(), 1);
    }
}
