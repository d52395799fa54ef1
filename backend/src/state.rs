// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::{
    catalog::Catalog,
    config::Config,
    services::repository::{NoteRepository, ResultRepository, SqliteStore},
};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub notes: Arc<dyn NoteRepository>,
    pub results: Arc<dyn ResultRepository>,
}

impl AppState {
    /// Wires both repositories to the SQLite store behind `pool`.
    pub fn new(pool: SqlitePool, config: Config, catalog: Catalog) -> Self {
        let store = Arc::new(SqliteStore::new(pool.clone()));
        Self {
            pool,
            config,
            catalog: Arc::new(catalog),
            notes: store.clone(),
            results: store,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<Catalog> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}
