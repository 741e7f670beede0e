//! Tab identity allocator.
//!
//! Tab ids carry no meaning beyond uniqueness. Collision resistance comes
//! from a wall-clock component plus a random suffix; no registry of issued
//! ids is kept, matching how attachment and chat-history ids are generated
//! elsewhere in the system.

use uuid::Uuid;

/// Length of the random suffix appended after the timestamp.
const SUFFIX_LEN: usize = 9;

fn now_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Generate an identifier for a new tab, distinct from any attachment id.
pub fn generate_tab_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("tab-{}-{}", now_millis(), &suffix[..SUFFIX_LEN])
}
