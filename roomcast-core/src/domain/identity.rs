use uuid::Uuid;

/// Generate a collision-resistant random identifier.
///
/// Backs both room ids and peer identities; every call is an independent
/// draw of 128 bits of entropy, so ids are practically unique across the
/// population of concurrently active clients and rooms.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
