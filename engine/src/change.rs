//! Component-change records ("cambio de polines") - maintenance log
//! entries for roller and liner replacements.
//!
//! These are the loosest records in the system: beyond the identity and
//! timestamp fields the merge needs, clients attach arbitrary domain
//! fields, carried here as a flattened JSON map.

use crate::{RecordId, SyncStatus, Syncable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A maintenance log entry, synchronized like every other collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentChange {
    /// Unique identifier
    pub id: RecordId,
    /// Tag of the equipment the component belongs to
    #[serde(default)]
    pub equipment_tag: String,
    /// Primary timestamp; merge comparisons prefer this
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Fallback date, used only when `timestamp` is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sync_status: SyncStatus,
    /// Arbitrary client-supplied domain fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Syncable for ComponentChange {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn effective_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp.or(self.date)
    }

    fn mark_synced(&mut self, now: DateTime<Utc>) {
        self.sync_status = SyncStatus::Synced;
        if self.timestamp.is_none() {
            self.timestamp = Some(now);
        }
    }
}
