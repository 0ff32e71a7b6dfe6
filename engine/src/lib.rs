//! # Tally Engine
//!
//! Core logic for an offline-tolerant inventory tracking system.
//!
//! This crate holds everything with real invariants: the data model for
//! the four synchronized collections, identity generation, the stock
//! ledger that derives material stock from movements, and the
//! last-writer-wins reconciliation used to merge client batches into
//! server state.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine knows nothing about files or sockets; callers
//!   pass in timestamps (identity generation being the one pragmatic
//!   exception)
//! - **Deterministic**: merging the same batch against the same state
//!   always produces the same result
//! - **Explicit failure**: conditions the original system swallowed
//!   (dangling material references, malformed records) surface as values
//!
//! ## Core Concepts
//!
//! ### Collections
//!
//! Four record types are synchronized: [`Material`] (inventory items),
//! [`Movement`] (an append-only stock event log), [`User`], and
//! [`ComponentChange`] (maintenance log entries). Every record carries a
//! unique id, a timestamp that only moves forward, and a [`SyncStatus`].
//!
//! ### Stock Ledger
//!
//! A [`Movement`] with an effectful [`MovementKind`] changes exactly one
//! material's stock and bumps its version by exactly one. The effect
//! table is closed: `Ingreso` adds, `Consumo` and `Salida` subtract, and
//! anything else is an explicit no-op.
//!
//! ### Reconciliation
//!
//! [`merge_collection`] folds a client batch into a server collection,
//! keyed by record id. A client record wins only when its effective
//! timestamp is strictly later than the server's; ties keep the server
//! record. The winner is a shallow field overlay, so client fields
//! override matching server fields and everything else is preserved.

pub mod change;
pub mod error;
pub mod ident;
pub mod ledger;
pub mod material;
pub mod merge;
pub mod movement;
pub mod record;
pub mod user;

pub use change::ComponentChange;
pub use error::Error;
pub use ident::new_record_id;
pub use ledger::{apply_movement, apply_to_collection, LedgerOutcome, StockEffect};
pub use material::Material;
pub use merge::{merge_collection, MergeReport};
pub use movement::{Movement, MovementKind};
pub use record::{SyncStatus, Syncable};
pub use user::{authenticate, email_taken, User, UserPublic};

/// Type aliases for clarity
pub type RecordId = String;
pub type Version = u64;
pub type Quantity = i64;
