//! # Database State
//!
//! Wraps the `Database` connection for use in commands.
//!
//! The `Database` from `cosmo-db` holds a `SqlitePool`, which is
//! thread-safe on its own; no extra locking is needed here.

use cosmo_db::Database;

/// Wrapper around `Database` for command state.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let products = db_state.inner().products().get_all().await?;
    /// ```
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
