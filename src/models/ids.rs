//! Entity id generation
//!
//! Local-clock millisecond ids with a process-wide counter suffix so that
//! entities created within the same millisecond stay distinct.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a new entity id
pub fn next_id() -> String {
    let millis = Local::now().timestamp_millis();
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{seq}")
}
