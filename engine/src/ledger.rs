//! The stock ledger: how movements mutate material stock.
//!
//! The effect table is closed and exhaustive. Stock is applied
//! unconditionally - negative stock is permitted, never clamped; the
//! `min_stock` threshold is the alerting channel, not a hard floor.

use crate::{Material, Movement, MovementKind, Quantity, Version};
use chrono::{DateTime, Utc};

/// The stock effect of a movement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockEffect {
    /// Stock increases by the movement quantity
    Increase,
    /// Stock decreases by the movement quantity
    Decrease,
    /// Stock is untouched - an explicit no-op, not an error
    NoOp,
}

impl MovementKind {
    /// The closed effect table: Ingreso adds, Consumo and Salida
    /// subtract, everything else leaves stock untouched.
    pub fn effect(&self) -> StockEffect {
        match self {
            MovementKind::Ingreso => StockEffect::Increase,
            MovementKind::Consumo | MovementKind::Salida => StockEffect::Decrease,
            MovementKind::Other(_) => StockEffect::NoOp,
        }
    }
}

/// What applying a movement against a material collection did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerOutcome {
    /// Stock was changed; carries the material's new version
    Applied { effect: StockEffect, version: Version },
    /// The movement kind has no stock effect
    NoEffect,
    /// The referenced material does not exist. The movement is still
    /// valid as a log entry, but the caller must report this condition.
    UnknownMaterial,
}

/// Apply a movement to a single material.
///
/// For effectful kinds, adjusts `current_stock` by the signed quantity,
/// increments `version` by exactly 1 and refreshes `last_modified`. For
/// no-op kinds the material is left completely untouched.
pub fn apply_movement(
    material: &mut Material,
    kind: &MovementKind,
    quantity: Quantity,
    now: DateTime<Utc>,
) -> StockEffect {
    let effect = kind.effect();
    match effect {
        StockEffect::Increase => {
            material.current_stock += quantity;
            material.touch(now);
        }
        StockEffect::Decrease => {
            material.current_stock -= quantity;
            material.touch(now);
        }
        StockEffect::NoOp => {}
    }
    effect
}

/// Apply a movement against a material collection, resolving the weak
/// `material_id` reference.
pub fn apply_to_collection(
    materials: &mut [Material],
    movement: &Movement,
    now: DateTime<Utc>,
) -> LedgerOutcome {
    if movement.kind.effect() == StockEffect::NoOp {
        return LedgerOutcome::NoEffect;
    }

    match materials.iter_mut().find(|m| m.id == movement.material_id) {
        Some(material) => {
            let effect = apply_movement(material, &movement.kind, movement.quantity, now);
            LedgerOutcome::Applied {
                effect,
                version: material.version,
            }
        }
        None => LedgerOutcome::UnknownMaterial,
    }
}
