use crate::domain::identity::generate_id;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock timestamp in seconds since the Unix epoch, fractional allowed.
///
/// Liveness timestamps originate in the external room store, which records
/// wall-clock time, so this is epoch-based rather than monotonic.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(f64);

impl Timestamp {
    /// The current moment according to the system clock.
    pub fn now() -> Self {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp(elapsed.as_secs_f64())
    }

    pub fn from_secs(secs: f64) -> Self {
        Timestamp(secs)
    }

    pub fn as_secs(&self) -> f64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self`.
    pub fn seconds_since(&self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Unique identifier for a room
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Create a new random room ID
    pub fn new() -> Self {
        Self(generate_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Immutable snapshot of a room document from the external store.
///
/// Records arrive via a live feed and are never mutated or deleted here;
/// a stale or absent `last_liveness` is how a room is inferred to be gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub room_id: RoomId,
    pub room_name: String,
    pub host_user_name: String,
    /// Set by the host's periodic liveness ping; absent until the first ping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_liveness: Option<Timestamp>,
}

impl RoomRecord {
    pub fn new(
        room_id: RoomId,
        room_name: impl Into<String>,
        host_user_name: impl Into<String>,
    ) -> Self {
        Self {
            room_id,
            room_name: room_name.into(),
            host_user_name: host_user_name.into(),
            last_liveness: None,
        }
    }

    pub fn with_liveness(mut self, at: Timestamp) -> Self {
        self.last_liveness = Some(at);
        self
    }
}
