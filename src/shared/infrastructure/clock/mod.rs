// Time source port.
//
// The core never reads the wall clock directly. It asks a `Clock`, so tests
// can pin time with a fixed implementation.

use crate::shared::core::primitives::Timestamp;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

pub trait Clock: Send + Sync {
    /// Current instant in nanoseconds. Never smaller than a previous reading.
    fn now(&self) -> Timestamp;
}

/// Wall clock in nanoseconds since the Unix epoch, clamped so that a
/// backwards system clock adjustment never yields a smaller reading.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicU64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let wall = Utc::now()
            .timestamp_nanos_opt()
            .and_then(|nanos| u64::try_from(nanos).ok())
            .unwrap_or(0);
        let previous = self.last.fetch_max(wall, Ordering::SeqCst);
        previous.max(wall)
    }
}
