//! Shared behavior for synchronizable records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a record is fully reconciled with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// Reconciled with server state
    #[default]
    Synced,
    /// Awaiting reconciliation
    Pending,
}

/// A record that participates in last-writer-wins reconciliation.
///
/// Every synchronized collection implements this. The effective timestamp
/// is what merge decisions compare: the record's primary timestamp, or a
/// fallback date field when the primary is absent.
pub trait Syncable {
    /// Unique identifier within the record's collection.
    fn record_id(&self) -> &str;

    /// The timestamp used for merge comparison and sorting.
    ///
    /// `None` means the record carries no usable timestamp at all; such a
    /// record loses to any timestamped server record and sorts last.
    fn effective_timestamp(&self) -> Option<DateTime<Utc>>;

    /// Mark the record as reconciled, defaulting a missing timestamp to
    /// `now`.
    fn mark_synced(&mut self, now: DateTime<Utc>);
}
