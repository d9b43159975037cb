//! SQL schema for the in-memory mood database.

/// Returns the full SQL schema as a single batch string.
///
/// One table, `moods`, holds individual check-ins:
/// - `mood_type` is the raw wire tag; unrecognized tags are kept verbatim
///   and resolve to the `custom` style at read time
/// - `date` is `YYYY-MM-DD` and `timestamp` is `YYYY-MM-DDTHH:MM:SS`,
///   both stored as TEXT (lexicographic order == chronological order)
///
/// Day rollups are not stored; they are derived in Rust from month queries.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS moods (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        mood_type TEXT NOT NULL,
        custom_label TEXT,
        intensity REAL NOT NULL,
        date TEXT NOT NULL,
        timestamp TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_moods_date ON moods(date);
    CREATE INDEX IF NOT EXISTS idx_moods_timestamp ON moods(timestamp);

    "#
}
