use crate::modules::events::core::event::Event;
use crate::modules::events::event_store::EventStore;
use crate::shared::infrastructure::clock::SystemClock;
use crate::shared::infrastructure::id_generator::UuidGenerator;
use crate::shared::infrastructure::record_store::RecordStore;
use crate::shared::infrastructure::record_store::file::FileRecordStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventStore>,
}

impl AppState {
    pub fn new(events: EventStore) -> Self {
        Self {
            events: Arc::new(events),
        }
    }

    /// Production wiring: system clock, random identifiers, and the record
    /// store selected by `config`.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let records: Arc<dyn RecordStore<Event>> = match &config.data_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "using file record store");
                Arc::new(FileRecordStore::<Event>::open(path).await?)
            }
            None => {
                tracing::info!("using in-memory record store");
                Arc::new(InMemoryRecordStore::<Event>::new())
            }
        };
        Ok(Self::new(EventStore::new(
            records,
            Arc::new(SystemClock::new()),
            Arc::new(UuidGenerator),
        )))
    }
}
