use crate::shared::core::primitives::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of an event's window, added to `start_date` on creation.
pub const EVENT_DURATION: Timestamp = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Inactive,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown event status: {0}")]
pub struct UnknownStatus(pub String);

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "active",
            EventStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for EventStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(EventStatus::Active),
            "inactive" => Ok(EventStatus::Inactive),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub owner_id: String,
    pub owner_name: String,
    pub asset_type: String,
    pub asset_description: String,
    pub status: EventStatus,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

impl Event {
    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }

    /// True while the window has not elapsed at `now`. `end_date == now`
    /// still counts as running.
    pub fn is_running_at(&self, now: Timestamp) -> bool {
        self.end_date >= now
    }
}
