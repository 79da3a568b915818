mod answers;
mod invoices;
mod plans;
mod questions;

use crate::error::{AppError, AppResult};
use refinery::embed_migrations;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

embed_migrations!("src/storage/migrations");

pub type DbConnection = Arc<Mutex<Connection>>;

pub struct Database {
    connection: DbConnection,
}

impl Database {
    pub fn new(db_path: &Path) -> AppResult<Self> {
        // Ensure the database directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> AppResult<Self> {
        // SQLite ships with foreign keys disabled
        conn.execute("PRAGMA foreign_keys = ON", [])?;

        let report = migrations::runner().run(&mut conn)?;
        info!(
            applied = report.applied_migrations().len(),
            "Database migrations complete"
        );

        Ok(Database {
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|e| AppError::Internal(format!("Failed to acquire database lock: {e}")))
    }
}
