//! Sample-data generation.
//!
//! Produces a deterministic month of check-ins that walks through every
//! render strategy: quiet days, single check-ins, icon rows, donut days,
//! and heavily-logged aggregated days. Deterministic output keeps fixture
//! diffs reviewable.

use anyhow::Context;
use mood_utils::dates;
use std::fs;

/// Per-day record counts, repeated across the month. Covers 0 (empty)
/// through 6 (aggregated).
const COUNT_PATTERN: [usize; 10] = [1, 0, 2, 3, 0, 4, 6, 1, 5, 0];

/// Mood tags cycled through the generated records.
const KIND_PATTERN: [&str; 6] = ["happy", "calm", "anxious", "sad", "angry", "custom"];

/// Intensities cycled through the generated records (0..=10 scale).
const INTENSITY_PATTERN: [u32; 7] = [5, 7, 3, 8, 4, 9, 6];

/// Generate one month of CSV rows in the loader's format.
pub fn generate_rows(year: i32, month: u32) -> String {
    let day_count = dates::days_in_month(year, month);
    let mut out = String::new();
    let mut record_index = 0usize;

    for day in 1..=day_count {
        let count = COUNT_PATTERN[(day as usize - 1) % COUNT_PATTERN.len()];
        for slot in 0..count {
            let kind = KIND_PATTERN[record_index % KIND_PATTERN.len()];
            let intensity = INTENSITY_PATTERN[record_index % INTENSITY_PATTERN.len()];
            // spread check-ins across the day, 3 hours apart from 07:00
            let hour = 7 + (slot as u32) * 3;
            let label = if kind == "custom" { ",reflective" } else { "" };
            out.push_str(&format!(
                "{kind},{intensity},{year:04}-{month:02}-{day:02},{year:04}-{month:02}-{day:02}T{hour:02}:00:00{label}\n"
            ));
            record_index += 1;
        }
    }
    out
}

/// Write a generated month to `output`.
pub fn run_seed(output: &str, year: i32, month: u32) -> anyhow::Result<()> {
    anyhow::ensure!((1..=12).contains(&month), "month must be 1-12, got {}", month);
    let rows = generate_rows(year, month);
    let record_count = rows.lines().count();
    fs::write(output, rows).with_context(|| format!("writing {}", output))?;
    log::info!("seed: wrote {} records to {}", record_count, output);
    println!("Wrote {} records for {:04}-{:02} to {}", record_count, year, month, output);
    Ok(())
}
