//! Movement records - the append-only stock event log.

use crate::{Quantity, RecordId, SyncStatus, Syncable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of a stock movement.
///
/// A closed tagged variant instead of open-ended string matching: unknown
/// kinds are preserved on the wire but their stock effect is an explicit
/// no-op, never a silent one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MovementKind {
    /// Inbound stock
    Ingreso,
    /// Consumed internally
    Consumo,
    /// Outbound transfer
    Salida,
    /// Any other kind; passes through with no stock effect
    Other(String),
}

impl From<String> for MovementKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Ingreso" => MovementKind::Ingreso,
            "Consumo" => MovementKind::Consumo,
            "Salida" => MovementKind::Salida,
            _ => MovementKind::Other(s),
        }
    }
}

impl From<MovementKind> for String {
    fn from(kind: MovementKind) -> Self {
        match kind {
            MovementKind::Ingreso => "Ingreso".to_string(),
            MovementKind::Consumo => "Consumo".to_string(),
            MovementKind::Salida => "Salida".to_string(),
            MovementKind::Other(s) => s,
        }
    }
}

/// A logged event that changes a material's stock.
///
/// Movements are immutable once created: the timestamp is server-stamped
/// at creation and the log is append-only, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    /// Unique identifier
    pub id: RecordId,
    /// Weak reference to a material; dangling references are tolerated
    /// but reported
    pub material_id: RecordId,
    /// Movement kind
    pub kind: MovementKind,
    /// Quantity moved
    pub quantity: Quantity,
    /// Server-stamped creation time, immutable thereafter
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub sync_status: SyncStatus,
}

impl Syncable for Movement {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn effective_timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.timestamp)
    }

    fn mark_synced(&mut self, _now: DateTime<Utc>) {
        self.sync_status = SyncStatus::Synced;
    }
}
