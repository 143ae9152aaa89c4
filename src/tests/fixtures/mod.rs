// Shared test doubles and builders.

use crate::modules::events::core::event::Event;
use crate::modules::events::core::input::EventInput;
use crate::modules::events::event_store::EventStore;
use crate::shared::core::primitives::Timestamp;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::id_generator::IdGenerator;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub const T0: Timestamp = 1_700_000_000_000_000_000;

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: AtomicU64,
}

impl FixedClock {
    pub fn at(now: Timestamp) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, by: Timestamp) {
        self.now.fetch_add(by, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}

/// Hands out `00000000-0000-4000-8000-000000000001`, `...002`, and so on.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("00000000-0000-4000-8000-{n:012x}")
    }
}

pub struct EventInputBuilder {
    inner: EventInput,
}

impl Default for EventInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: EventInput {
                asset_type: "car".into(),
                asset_description: "sedan".into(),
                owner_name: "Alice".into(),
                status: "active".into(),
            },
        }
    }

    pub fn asset_type(mut self, v: impl Into<String>) -> Self {
        self.inner.asset_type = v.into();
        self
    }

    pub fn asset_description(mut self, v: impl Into<String>) -> Self {
        self.inner.asset_description = v.into();
        self
    }

    pub fn owner_name(mut self, v: impl Into<String>) -> Self {
        self.inner.owner_name = v.into();
        self
    }

    pub fn status(mut self, v: impl Into<String>) -> Self {
        self.inner.status = v.into();
        self
    }

    pub fn build(self) -> EventInput {
        self.inner
    }
}

/// An `EventStore` over an in-memory map, a `FixedClock` at `T0` and
/// sequential identifiers. The clock is returned so tests can move it.
pub fn make_event_store() -> (EventStore, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::at(T0));
    let store = EventStore::new(
        Arc::new(InMemoryRecordStore::<Event>::new()),
        clock.clone(),
        Arc::new(SequentialIdGenerator::new()),
    );
    (store, clock)
}

/// Same as `make_event_store`, but every record store call fails.
pub fn make_offline_event_store() -> EventStore {
    let mut records = InMemoryRecordStore::<Event>::new();
    records.toggle_offline();
    EventStore::new(
        Arc::new(records),
        Arc::new(FixedClock::at(T0)),
        Arc::new(SequentialIdGenerator::new()),
    )
}
