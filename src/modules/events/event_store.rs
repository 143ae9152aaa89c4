// The event store: the single owner of all Event records.
//
// Responsibilities
// - Validate identifiers, statuses and creation input before touching storage.
// - Enforce that only an event's owner may update, end or delete it.
// - Mint identifiers and dates from the injected collaborators.
//
// Every operation holds `gate` for its whole duration, so operations never
// interleave and each one is atomic from the caller's point of view.

use crate::modules::events::core::event::{EVENT_DURATION, Event, EventStatus, UnknownStatus};
use crate::modules::events::core::input::EventInput;
use crate::shared::core::primitives::is_identifier;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::id_generator::IdGenerator;
use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("Invalid event id: {0}")]
    InvalidId(String),

    #[error("Invalid owner id: {0}")]
    InvalidOwnerId(String),

    #[error("Invalid status: {0}, expected 'active' or 'inactive'")]
    InvalidStatus(String),

    #[error("Asset type, asset description, owner name and status are all required")]
    IncompleteInput,

    #[error("Event {0} not found")]
    NotFound(String),

    #[error("Only the owner can {action} this event!")]
    Forbidden { action: &'static str },

    #[error("Event {0} has already ended")]
    AlreadyEnded(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<RecordStoreError> for EventStoreError {
    fn from(error: RecordStoreError) -> Self {
        tracing::warn!(%error, "record store failure");
        EventStoreError::Unexpected(error.to_string())
    }
}

impl From<UnknownStatus> for EventStoreError {
    fn from(error: UnknownStatus) -> Self {
        EventStoreError::InvalidStatus(error.0)
    }
}

fn check_id(id: &str) -> Result<(), EventStoreError> {
    if !is_identifier(id) {
        return Err(EventStoreError::InvalidId(id.to_string()));
    }
    Ok(())
}

fn check_owner_id(owner_id: &str) -> Result<(), EventStoreError> {
    if !is_identifier(owner_id) {
        return Err(EventStoreError::InvalidOwnerId(owner_id.to_string()));
    }
    Ok(())
}

pub struct EventStore {
    records: Arc<dyn RecordStore<Event>>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    gate: Mutex<()>,
}

impl EventStore {
    pub fn new(
        records: Arc<dyn RecordStore<Event>>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            records,
            clock,
            ids,
            gate: Mutex::new(()),
        }
    }

    pub async fn get_all_events(&self) -> Result<Vec<Event>, EventStoreError> {
        let _gate = self.gate.lock().await;
        let events = self.records.values().await?;
        tracing::debug!(count = events.len(), "events listed");
        Ok(events)
    }

    pub async fn get_event_by_id(&self, id: &str) -> Result<Event, EventStoreError> {
        check_id(id)?;
        let _gate = self.gate.lock().await;
        let event = self.load(id).await?;
        tracing::debug!(id, "event fetched");
        Ok(event)
    }

    pub async fn get_owners_events(&self, owner_id: &str) -> Result<Vec<Event>, EventStoreError> {
        check_owner_id(owner_id)?;
        let _gate = self.gate.lock().await;
        let events: Vec<Event> = self
            .records
            .values()
            .await?
            .into_iter()
            .filter(|event| event.is_owned_by(owner_id))
            .collect();
        tracing::debug!(owner_id, count = events.len(), "owner's events listed");
        Ok(events)
    }

    pub async fn get_events_by_status(&self, status: &str) -> Result<Vec<Event>, EventStoreError> {
        let status: EventStatus = status.parse()?;
        let _gate = self.gate.lock().await;
        let events: Vec<Event> = self
            .records
            .values()
            .await?
            .into_iter()
            .filter(|event| event.status == status)
            .collect();
        tracing::debug!(%status, count = events.len(), "events listed by status");
        Ok(events)
    }

    pub async fn create_event(&self, input: EventInput) -> Result<Event, EventStoreError> {
        if !input.is_complete() {
            return Err(EventStoreError::IncompleteInput);
        }
        let status: EventStatus = input.status.parse()?;

        let _gate = self.gate.lock().await;
        let start_date = self.clock.now();
        let event = Event {
            id: self.ids.generate(),
            owner_id: self.ids.generate(),
            owner_name: input.owner_name,
            asset_type: input.asset_type,
            asset_description: input.asset_description,
            status,
            start_date,
            end_date: start_date.saturating_add(EVENT_DURATION),
        };
        self.records.insert(&event.id, event.clone()).await?;
        tracing::info!(id = %event.id, owner_id = %event.owner_id, "event created");
        Ok(event)
    }

    pub async fn update_event(
        &self,
        id: &str,
        owner_id: &str,
        input: EventInput,
    ) -> Result<Event, EventStoreError> {
        check_id(id)?;
        check_owner_id(owner_id)?;
        input.parsed_status()?;

        let _gate = self.gate.lock().await;
        let stored = self.load_owned(id, owner_id, "update").await?;
        let updated = input.patch(stored)?;
        self.records.insert(id, updated.clone()).await?;
        tracing::info!(id, "event updated");
        Ok(updated)
    }

    /// Rejects with `AlreadyEnded` while `end_date >= now`, so only an event
    /// whose window has elapsed can be ended.
    pub async fn end_event(&self, id: &str, owner_id: &str) -> Result<Event, EventStoreError> {
        check_id(id)?;
        check_owner_id(owner_id)?;

        let _gate = self.gate.lock().await;
        let mut event = self.load_owned(id, owner_id, "end").await?;
        let now = self.clock.now();
        if event.is_running_at(now) {
            return Err(EventStoreError::AlreadyEnded(id.to_string()));
        }
        event.end_date = now;
        event.status = EventStatus::Inactive;
        self.records.insert(id, event.clone()).await?;
        tracing::info!(id, end_date = now, "event ended");
        Ok(event)
    }

    /// The record is removed before ownership is checked: a `Forbidden`
    /// result still means the record is gone.
    pub async fn delete_event(&self, id: &str, owner_id: &str) -> Result<Event, EventStoreError> {
        check_id(id)?;
        check_owner_id(owner_id)?;

        let _gate = self.gate.lock().await;
        let removed = self
            .records
            .remove(id)
            .await?
            .ok_or_else(|| EventStoreError::NotFound(id.to_string()))?;
        if !removed.is_owned_by(owner_id) {
            tracing::warn!(id, owner_id, "event removed by a caller that does not own it");
            return Err(EventStoreError::Forbidden { action: "delete" });
        }
        tracing::info!(id, "event deleted");
        Ok(removed)
    }

    async fn load(&self, id: &str) -> Result<Event, EventStoreError> {
        self.records
            .get(id)
            .await?
            .ok_or_else(|| EventStoreError::NotFound(id.to_string()))
    }

    async fn load_owned(
        &self,
        id: &str,
        owner_id: &str,
        action: &'static str,
    ) -> Result<Event, EventStoreError> {
        let event = self.load(id).await?;
        if !event.is_owned_by(owner_id) {
            tracing::warn!(id, owner_id, action, "owner mismatch");
            return Err(EventStoreError::Forbidden { action });
        }
        Ok(event)
    }
}
