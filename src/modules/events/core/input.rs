use crate::modules::events::core::event::{Event, EventStatus, UnknownStatus};
use serde::Deserialize;

/// Caller supplied fields of an event. Used whole on creation and as a
/// field-level patch on update, where an empty field means "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventInput {
    pub asset_type: String,
    pub asset_description: String,
    pub owner_name: String,
    pub status: String,
}

impl EventInput {
    pub fn is_complete(&self) -> bool {
        !self.asset_type.is_empty()
            && !self.asset_description.is_empty()
            && !self.owner_name.is_empty()
            && !self.status.is_empty()
    }

    /// `None` when the status field is empty.
    pub fn parsed_status(&self) -> Result<Option<EventStatus>, UnknownStatus> {
        if self.status.is_empty() {
            return Ok(None);
        }
        self.status.parse().map(Some)
    }

    /// Copies every non-empty field onto `event`. Identity and dates are
    /// never touched.
    pub fn patch(self, mut event: Event) -> Result<Event, UnknownStatus> {
        if let Some(status) = self.parsed_status()? {
            event.status = status;
        }
        if !self.asset_type.is_empty() {
            event.asset_type = self.asset_type;
        }
        if !self.asset_description.is_empty() {
            event.asset_description = self.asset_description;
        }
        if !self.owner_name.is_empty() {
            event.owner_name = self.owner_name;
        }
        Ok(event)
    }
}
