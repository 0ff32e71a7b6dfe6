//! Shared application state: one store per collection.

use crate::config::Config;
use crate::seed;
use crate::store::JsonStore;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tally_engine::{ComponentChange, Material, Movement, User};

/// The four durable collections, each with a single owning store.
#[derive(Debug)]
pub struct Stores {
    pub materials: JsonStore<Material>,
    pub movements: JsonStore<Movement>,
    pub users: JsonStore<User>,
    pub changes: JsonStore<ComponentChange>,
}

impl Stores {
    /// Open all collection stores under `data_dir`, creating it if
    /// needed. Missing or corrupt files seed defaults (materials, users)
    /// or an empty log (movements, component changes).
    pub fn open(data_dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(data_dir)?;

        Ok(Self {
            materials: JsonStore::open(
                data_dir.join("inventory.json"),
                seed::default_materials(),
            ),
            movements: JsonStore::open(data_dir.join("movements.json"), Vec::new()),
            users: JsonStore::open(data_dir.join("users.json"), seed::default_users()),
            changes: JsonStore::open(data_dir.join("component-changes.json"), Vec::new()),
        })
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub stores: Arc<Stores>,
    pub config: Arc<Config>,
}
