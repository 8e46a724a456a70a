//! Course id generation.
//!
//! # Design Decisions
//! - Ids derive from wall-clock milliseconds by default, near-unique in
//!   practice but not collision-proof under rapid creation. The strategy is
//!   a trait so tests (or a future deployment) can swap in a deterministic
//!   source without touching store code.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of ids for newly created courses.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> i64;
}

/// Wall-clock id source: milliseconds since the Unix epoch.
#[derive(Debug, Default)]
pub struct WallClockIds;

impl IdSource for WallClockIds {
    fn next_id(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Monotonic counter id source for deterministic tests.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicI64,
}

impl SequentialIds {
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
