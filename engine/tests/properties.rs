//! End-to-end properties of the ledger and merge, exercised through the
//! public crate surface.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use serde_json::Map;
use tally_engine::{
    apply_movement, apply_to_collection, merge_collection, ComponentChange, LedgerOutcome,
    Material, Movement, MovementKind, StockEffect, SyncStatus,
};

fn material(id: &str, stock: i64) -> Material {
    Material {
        id: id.into(),
        code: format!("{}-C", id.to_uppercase()),
        description: "Polín de prueba".into(),
        kind: "Polín".into(),
        current_stock: stock,
        min_stock: 10,
        location: "Almacén A".into(),
        supplier: "Proveedor ABC".into(),
        unit_price: 120.0,
        last_modified: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        version: 1,
        sync_status: SyncStatus::Synced,
    }
}

fn movement(material_id: &str, kind: &str, quantity: i64) -> Movement {
    Movement {
        id: tally_engine::new_record_id(),
        material_id: material_id.into(),
        kind: MovementKind::from(kind.to_string()),
        quantity,
        timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        sync_status: SyncStatus::Synced,
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

#[test]
fn ingreso_scenario_from_stock_45() {
    // {id:"m1", currentStock:45} + Ingreso of 10 -> stock 55, version 2
    let mut materials = vec![material("m1", 45)];

    let outcome = apply_to_collection(&mut materials, &movement("m1", "Ingreso", 10), now());

    assert_eq!(
        outcome,
        LedgerOutcome::Applied {
            effect: StockEffect::Increase,
            version: 2
        }
    );
    assert_eq!(materials[0].current_stock, 55);
    assert_eq!(materials[0].version, 2);
}

#[test]
fn consumo_may_drive_stock_negative() {
    let mut m = material("m1", 4);
    apply_movement(&mut m, &MovementKind::Consumo, 9, now());
    assert_eq!(m.current_stock, -5);
    assert_eq!(m.version, 2);
}

#[test]
fn empty_server_merge_scenario() {
    // Empty server + client batch [{id:"r1", ...}] -> one synced record r1
    let mut server: Vec<ComponentChange> = Vec::new();
    let batch = vec![ComponentChange {
        id: "r1".into(),
        equipment_tag: "X".into(),
        timestamp: Some("2024-01-01T00:00:00Z".parse().unwrap()),
        date: None,
        sync_status: SyncStatus::Pending,
        extra: Map::new(),
    }];

    merge_collection(&mut server, batch, now()).unwrap();

    assert_eq!(server.len(), 1);
    assert_eq!(server[0].id, "r1");
    assert_eq!(server[0].sync_status, SyncStatus::Synced);
}

#[test]
fn older_client_submission_loses() {
    let mut server = vec![ComponentChange {
        id: "r1".into(),
        equipment_tag: "X".into(),
        timestamp: Some("2024-01-02T00:00:00Z".parse().unwrap()),
        date: None,
        sync_status: SyncStatus::Synced,
        extra: Map::new(),
    }];
    let batch = vec![ComponentChange {
        id: "r1".into(),
        equipment_tag: "Y".into(),
        timestamp: Some("2024-01-01T00:00:00Z".parse().unwrap()),
        date: None,
        sync_status: SyncStatus::Pending,
        extra: Map::new(),
    }];

    merge_collection(&mut server, batch, now()).unwrap();

    assert_eq!(server[0].equipment_tag, "X");
}

proptest! {
    #[test]
    fn prop_ingreso_sequence_sums(
        initial in -1_000i64..1_000,
        quantities in proptest::collection::vec(1i64..500, 0..25),
    ) {
        // For Ingreso quantities q1..qn against initial stock s0, final
        // stock is s0 + sum(qi) and version increases by exactly n.
        let mut m = material("m1", initial);
        for &q in &quantities {
            apply_movement(&mut m, &MovementKind::Ingreso, q, now());
        }

        let total: i64 = quantities.iter().sum();
        prop_assert_eq!(m.current_stock, initial + total);
        prop_assert_eq!(m.version, 1 + quantities.len() as u64);
    }

    #[test]
    fn prop_outbound_decreases_regardless_of_sign(
        initial in -1_000i64..1_000,
        quantity in 1i64..500,
        outbound in prop_oneof![Just(MovementKind::Consumo), Just(MovementKind::Salida)],
    ) {
        let mut m = material("m1", initial);
        apply_movement(&mut m, &outbound, quantity, now());

        prop_assert_eq!(m.current_stock, initial - quantity);
        prop_assert_eq!(m.version, 2);
    }
}
