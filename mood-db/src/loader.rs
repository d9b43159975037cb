//! CSV ingest for the mood database.
//!
//! # CSV Format
//!
//! Headerless, one check-in per row:
//!
//! ```text
//! mood_type,intensity,date(YYYY-MM-DD),timestamp(YYYY-MM-DDTHH:MM:SS)[,custom_label]
//! ```
//!
//! The `custom_label` column is optional and usually present only for
//! `custom` moods. Rows with an unparseable intensity, date, or timestamp
//! are skipped and counted, never fatal -- the fixture pipeline can leave
//! partial rows behind. Unrecognized `mood_type` tags are stored verbatim;
//! they resolve to the `custom` style when read back.

use crate::Database;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::params;

impl Database {
    /// Load mood check-ins from a CSV string.
    ///
    /// # Example CSV
    /// ```text
    /// happy,7,2024-03-15,2024-03-15T08:30:00
    /// custom,5,2024-03-15,2024-03-15T12:10:00,nostalgic
    /// ```
    pub fn load_moods(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let mood_type = r.get(0).unwrap_or("").trim();
            let intensity_str = r.get(1).unwrap_or("").trim();
            let date_str = r.get(2).unwrap_or("").trim();
            let timestamp_str = r.get(3).unwrap_or("").trim();
            let custom_label = r.get(4).map(str::trim).filter(|s| !s.is_empty());

            let intensity: f64 = match intensity_str.parse::<f64>() {
                Ok(v) if (0.0..=10.0).contains(&v) => v,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            if mood_type.is_empty()
                || NaiveDate::parse_from_str(date_str, "%Y-%m-%d").is_err()
                || NaiveDateTime::parse_from_str(timestamp_str, "%Y-%m-%dT%H:%M:%S").is_err()
            {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT INTO moods (mood_type, custom_label, intensity, date, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![mood_type, custom_label, intensity, date_str, timestamp_str],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} moods, skipped {} invalid", count, skipped);
        Ok(())
    }
}
