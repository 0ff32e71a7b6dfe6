//! Default records used when no persisted state exists.
//!
//! Materials and users seed with the same defaults the plant started
//! with; movements and component changes start empty.

use chrono::Utc;
use tally_engine::{Material, SyncStatus, User};

/// The two starter materials.
pub fn default_materials() -> Vec<Material> {
    let now = Utc::now();
    vec![
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
            last_modified: now,
            version: 1,
            sync_status: SyncStatus::Synced,
        },
        Material {
            id: "lin001".into(),
            code: "LIN-001".into(),
            description: "Liner de Goma 800x600mm".into(),
            kind: "Liner".into(),
            current_stock: 8,
            min_stock: 15,
            location: "Almacén B".into(),
            supplier: "Proveedor XYZ".into(),
            unit_price: 280.0,
            last_modified: now,
            version: 1,
            sync_status: SyncStatus::Synced,
        },
    ]
}

/// The three starter accounts (placeholder plaintext credentials).
pub fn default_users() -> Vec<User> {
    let now = Utc::now();
    let user = |id: &str, password: &str, full_name: &str, role: &str, shift: &str| User {
        id: id.into(),
        username: id.into(),
        password: password.into(),
        full_name: full_name.into(),
        email: format!("{id}@empresa.com"),
        role: role.into(),
        active: true,
        shift: shift.into(),
        created_at: now,
        last_access: None,
        last_modified: now,
        sync_status: SyncStatus::Synced,
        deleted: false,
    };

    vec![
        user(
            "admin",
            "admin123",
            "Administrador del Sistema",
            "Administrador",
            "A",
        ),
        user(
            "supervisor",
            "super123",
            "Supervisor de Turno",
            "Supervisor",
            "A",
        ),
        user("operador", "oper123", "Operador de Planta", "Operador", "B"),
    ]
}
