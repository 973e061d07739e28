//! Id allocator port

use std::sync::atomic::{AtomicU64, Ordering};

pub trait IdAllocator: Send + Sync {
    /// Return a fresh id unique within the process, rendered as
    /// `<prefix>-<suffix>`
    fn fresh(&self, prefix: &str) -> String;
}

/// Snowflake-style allocator (millis + random bits)
#[derive(Debug, Default, Clone, Copy)]
pub struct SnowflakeAllocator;

impl IdAllocator for SnowflakeAllocator {
    fn fresh(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, shared::util::snowflake_id())
    }
}

/// Deterministic sequential allocator for tests
#[derive(Debug, Default)]
pub struct SequentialAllocator {
    next: AtomicU64,
}

impl IdAllocator for SequentialAllocator {
    fn fresh(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{:03}", prefix, n)
    }
}
