//! Typed query methods for retrieving mood events.
//!
//! Queries return [`MoodEvent`] values in chronological order, ready to be
//! rolled up per day with [`mood_core::aggregate::aggregate_days`]. Mood
//! tags are resolved through [`MoodKind::from_tag`] at read time, so rows
//! with unrecognized tags come back as `Custom` instead of failing.

use crate::Database;
use chrono::{NaiveDate, NaiveDateTime};
use mood_core::event::MoodEvent;
use mood_core::style::MoodKind;
use rusqlite::params;
use rusqlite::types::Type;

/// Raw row shape before date parsing.
struct MoodRow {
    mood_type: String,
    custom_label: Option<String>,
    intensity: f64,
    date: String,
    timestamp: String,
}

fn row_to_event(row: MoodRow) -> rusqlite::Result<MoodEvent> {
    let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    let timestamp = NaiveDateTime::parse_from_str(&row.timestamp, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;
    Ok(MoodEvent {
        kind: MoodKind::from_tag(&row.mood_type),
        custom_label: row.custom_label,
        intensity: row.intensity,
        date,
        timestamp,
    })
}

impl Database {
    /// All check-ins for one calendar month, chronological.
    pub fn query_month(&self, year: i32, month: u32) -> anyhow::Result<Vec<MoodEvent>> {
        let prefix = format!("{:04}-{:02}-", year, month);
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT mood_type, custom_label, intensity, date, timestamp
             FROM moods
             WHERE date LIKE ?1 || '%'
             ORDER BY timestamp",
        )?;
        let rows = stmt
            .query_map(params![prefix], |row| {
                row_to_event(MoodRow {
                    mood_type: row.get(0)?,
                    custom_label: row.get(1)?,
                    intensity: row.get(2)?,
                    date: row.get(3)?,
                    timestamp: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_month {}-{:02} returned {} records", year, month, rows.len());
        Ok(rows)
    }

    /// All check-ins for one day, chronological.
    pub fn query_day(&self, date: NaiveDate) -> anyhow::Result<Vec<MoodEvent>> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT mood_type, custom_label, intensity, date, timestamp
             FROM moods
             WHERE date = ?1
             ORDER BY timestamp",
        )?;
        let rows = stmt
            .query_map(params![date_str], |row| {
                row_to_event(MoodRow {
                    mood_type: row.get(0)?,
                    custom_label: row.get(1)?,
                    intensity: row.get(2)?,
                    date: row.get(3)?,
                    timestamp: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Earliest and latest check-in dates, used to pick the initial month.
    /// `None` when the database holds no records.
    pub fn query_date_range(&self) -> anyhow::Result<Option<(NaiveDate, NaiveDate)>> {
        let conn = self.conn.borrow();
        let range: (Option<String>, Option<String>) = conn.query_row(
            "SELECT MIN(date), MAX(date) FROM moods",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        match range {
            (Some(min), Some(max)) => {
                let min = NaiveDate::parse_from_str(&min, "%Y-%m-%d")?;
                let max = NaiveDate::parse_from_str(&max, "%Y-%m-%d")?;
                Ok(Some((min, max)))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use chrono::NaiveDate;
    use mood_core::style::MoodKind;

    fn seeded() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
sad,3,2024-03-15,2024-03-15T20:15:00
happy,7,2024-03-15,2024-03-15T08:30:00
calm,5,2024-04-01,2024-04-01T09:00:00
unknown_xyz,6,2024-03-20,2024-03-20T10:00:00
";
        db.load_moods(csv).unwrap();
        db
    }

    #[test]
    fn query_month_is_chronological_and_bounded() {
        let db = seeded();
        let events = db.query_month(2024, 3).unwrap();
        assert_eq!(events.len(), 3, "April record must not appear in March");
        assert!(events.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(events[0].kind, MoodKind::Happy);
    }

    #[test]
    fn query_month_resolves_unknown_tags_to_custom() {
        let db = seeded();
        let events = db.query_month(2024, 3).unwrap();
        let unknown = events
            .iter()
            .find(|e| e.date == NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
            .unwrap();
        assert_eq!(unknown.kind, MoodKind::Custom);
    }

    #[test]
    fn query_day_returns_only_that_day() {
        let db = seeded();
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let events = db.query_day(day).unwrap();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.date == day));
    }

    #[test]
    fn query_date_range_spans_the_data() {
        let db = seeded();
        let (min, max) = db.query_date_range().unwrap().unwrap();
        assert_eq!(min, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(max, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }

    #[test]
    fn query_date_range_is_none_when_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_date_range().unwrap().is_none());
    }
}
