//! Per-day rollup report.
//!
//! Loads a moods CSV through the same pipeline the web app uses
//! (`mood-db` loader -> month query -> `mood-core` aggregation) and prints
//! one row per recorded day with the render strategy the calendar would
//! pick for it.

use anyhow::Context;
use mood_core::aggregate::{aggregate_days, DayAggregate};
use mood_core::strategy::RenderStrategy;
use mood_db::Database;
use mood_utils::dates;
use std::fs;

/// Render the rollup table for already-aggregated days.
pub fn format_table(days: &[(chrono::NaiveDate, DayAggregate)]) -> String {
    let mut out = String::new();
    out.push_str("date        count  primary   avg   strategy\n");
    for (date, day) in days {
        out.push_str(&format!(
            "{}  {:>5}  {:<8}  {:>4.1}  {:?}\n",
            dates::format_iso(date),
            day.count,
            day.primary.kind.tag(),
            day.avg_intensity,
            RenderStrategy::for_day(Some(day)),
        ));
    }
    out
}

pub fn run_stats(moods_csv: &str, year: i32, month: u32) -> anyhow::Result<()> {
    anyhow::ensure!((1..=12).contains(&month), "month must be 1-12, got {}", month);

    let csv_data = fs::read_to_string(moods_csv).with_context(|| format!("reading {}", moods_csv))?;
    let db = Database::new()?;
    db.load_moods(&csv_data)?;

    let events = db.query_month(year, month)?;
    if events.is_empty() {
        println!("No records for {:04}-{:02} in {}", year, month, moods_csv);
        return Ok(());
    }

    let days: Vec<_> = aggregate_days(events).into_iter().collect();
    log::info!("stats: {} recorded days in {:04}-{:02}", days.len(), year, month);
    print!("{}", format_table(&days));
    Ok(())
}
