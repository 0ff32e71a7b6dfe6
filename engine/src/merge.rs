//! Last-writer-wins reconciliation of client batches into server state.
//!
//! # Algorithm
//!
//! For each client record in the batch, keyed by record id:
//!
//! 1. Absent from the server collection: insert it, marked synced, with
//!    a missing timestamp defaulted to now.
//! 2. Present: the client wins only if its effective timestamp is
//!    strictly later than the server's. The winner is a shallow field
//!    overlay (client fields override, absent fields keep server
//!    values). Ties keep the server record, so a record's timestamp
//!    never moves backward.
//!
//! After the batch, the collection is re-sorted descending by effective
//! timestamp so the most recent record comes first.

use crate::{error::Result, Syncable};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Counters describing what a merge did, for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    /// Client records not previously known to the server
    pub inserted: usize,
    /// Server records replaced by a later-timestamped client record
    pub replaced: usize,
    /// Client records discarded because the server record was as recent
    /// or newer
    pub kept: usize,
}

/// Shallow overlay: client object fields override server fields, all
/// other server fields are preserved. Non-object values replace wholesale.
fn overlay(server: Value, client: Value) -> Value {
    match (server, client) {
        (Value::Object(mut base), Value::Object(patch)) => {
            for (key, value) in patch {
                base.insert(key, value);
            }
            Value::Object(base)
        }
        (_, client) => client,
    }
}

/// Merge a client batch into a server collection using last-writer-wins.
///
/// The caller owns atomicity: the collection must not be visible to
/// concurrent merges while this runs, and must only be persisted after
/// this returns `Ok`.
pub fn merge_collection<T>(
    server: &mut Vec<T>,
    batch: Vec<T>,
    now: DateTime<Utc>,
) -> Result<MergeReport>
where
    T: Syncable + Serialize + DeserializeOwned,
{
    let mut report = MergeReport::default();

    for client in batch {
        match server.iter().position(|r| r.record_id() == client.record_id()) {
            None => {
                let mut record = client;
                record.mark_synced(now);
                server.push(record);
                report.inserted += 1;
            }
            Some(i) => {
                let client_wins = match (client.effective_timestamp(), server[i].effective_timestamp())
                {
                    (Some(c), Some(s)) => c > s,
                    // A timestamped client record beats an untimestamped
                    // server record; otherwise the server record stands.
                    (Some(_), None) => true,
                    (None, _) => false,
                };

                if client_wins {
                    let merged = overlay(
                        serde_json::to_value(&server[i])?,
                        serde_json::to_value(&client)?,
                    );
                    let mut merged: T = serde_json::from_value(merged)?;
                    merged.mark_synced(now);
                    server[i] = merged;
                    report.replaced += 1;
                } else {
                    report.kept += 1;
                }
            }
        }
    }

    // Newest first; records without any timestamp sort last.
    server.sort_by(|a, b| b.effective_timestamp().cmp(&a.effective_timestamp()));

    Ok(report)
}
