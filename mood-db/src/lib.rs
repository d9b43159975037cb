//! In-memory SQLite store for mood check-in records.
//!
//! Loads CSV mood data into an in-memory SQLite database and exposes typed
//! query methods for the Dioxus calendar app compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in consuming crates
//! - Queries return [`mood_core::event::MoodEvent`] values ready for aggregation
//!
//! # Usage
//!
//! ```rust
//! use mood_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_moods("happy,7,2024-03-15,2024-03-15T08:30:00\n").unwrap();
//! let events = db.query_month(2024, 3).unwrap();
//! assert_eq!(events.len(), 1);
//! ```
//!
//! Per-day rollups (count, primary mood, average intensity) are not stored;
//! they are derived per month via [`mood_core::aggregate::aggregate_days`]
//! over the query results.

pub mod schema;
mod loader;
mod queries;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database of mood check-ins.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_moods`]
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_moods("happy,7,2024-03-15,2024-03-15T08:30:00\n")
            .unwrap();
        let events = db2.query_month(2024, 3).unwrap();
        assert_eq!(events.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let events = db.query_month(2024, 3).unwrap();
        assert!(events.is_empty(), "New database should have no moods");
    }
}
