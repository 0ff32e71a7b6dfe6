//! Material records - the inventory items whose stock is tracked.

use crate::{Quantity, RecordId, SyncStatus, Syncable, Version};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An inventory item tracked by stock level.
///
/// Owned by the record store; mutated only by the stock ledger (when a
/// movement is applied) or direct creation. `version` starts at 1 and
/// increments exactly once per applied movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Unique identifier
    pub id: RecordId,
    /// Human-readable code, unique by convention
    pub code: String,
    /// Free-text description
    pub description: String,
    /// Type tag (e.g. "Polín", "Liner")
    #[serde(rename = "type")]
    pub kind: String,
    /// Current stock count; may go negative (movements apply unconditionally)
    pub current_stock: Quantity,
    /// Threshold for low-stock alerting
    pub min_stock: Quantity,
    /// Warehouse location
    pub location: String,
    /// Supplier name
    pub supplier: String,
    /// Unit price
    pub unit_price: f64,
    /// Last modification time; only ever moves forward
    pub last_modified: DateTime<Utc>,
    /// Mutation counter, starts at 1
    pub version: Version,
    #[serde(default)]
    pub sync_status: SyncStatus,
}

impl Material {
    /// Whether the current stock has fallen below the alert threshold.
    pub fn is_low_stock(&self) -> bool {
        self.current_stock < self.min_stock
    }

    /// Refresh the modification timestamp and bump the version.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_modified = now;
        self.version += 1;
    }
}

impl Syncable for Material {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn effective_timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.last_modified)
    }

    fn mark_synced(&mut self, _now: DateTime<Utc>) {
        self.sync_status = SyncStatus::Synced;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_material() -> Material {
        Material {
            id: "pol001".into(),
            code: "POL-001".into(),
            description: "Polín de Acero 1200mm".into(),
            kind: "Polín".into(),
            current_stock: 45,
            min_stock: 20,
            location: "Almacén A".into(),
            supplier: "Proveedor ABC".into(),
            unit_price: 150.0,
            last_modified: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            version: 1,
            sync_status: SyncStatus::Synced,
        }
    }

    #[test]
    fn touch_bumps_version_and_timestamp() {
        let mut material = test_material();
        let later = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        material.touch(later);

        assert_eq!(material.version, 2);
        assert_eq!(material.last_modified, later);
    }

    #[test]
    fn low_stock_threshold() {
        let mut material = test_material();
        assert!(!material.is_low_stock());

        material.current_stock = 19;
        assert!(material.is_low_stock());
    }

    #[test]
    fn serialization_uses_camel_case_and_type_tag() {
        let json = serde_json::to_string(&test_material()).unwrap();
        assert!(json.contains("\"currentStock\":45"));
        assert!(json.contains("\"type\":\"Polín\""));
        assert!(json.contains("\"syncStatus\":\"synced\""));
    }

    #[test]
    fn serialization_roundtrip() {
        let material = test_material();
        let json = serde_json::to_string(&material).unwrap();
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(material, parsed);
    }
}
