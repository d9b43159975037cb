//! Mood Calendar
//!
//! Renders one month of mood check-ins as a calendar grid. Each day cell
//! picks its own visual strategy from the record count: a single icon, an
//! icon row, a donut ring of mood shares, or an aggregated badge with an
//! intensity-driven gradient.
//!
//! Data flow:
//! 1. `build.rs` copies `moods.csv` into `OUT_DIR` (with an inline sample
//!    fallback) and `include_str!` embeds it into the WASM binary.
//! 2. On mount: the CSV is loaded into an in-memory SQLite database and
//!    the newest recorded month becomes the displayed month.
//! 3. On month change: the month's events are queried and rolled up into
//!    per-day aggregates, which the grid renders.

use chrono::Datelike;
use dioxus::prelude::*;
use mood_chart_ui::components::{
    CalendarGrid, ErrorDisplay, LoadingSpinner, MonthPicker, PageHeader,
};
use mood_chart_ui::state::AppState;
use mood_chart_ui::tooltip::MoodTooltip;
use mood_db::Database;

// Embed the mood fixture at compile time.
const MOODS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/moods.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("mood-calendar-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the embedded CSV once on mount ───
    use_effect(move || {
        match Database::new() {
            Ok(db) => {
                if let Err(e) = db.load_moods(MOODS_CSV) {
                    log::error!("Failed to load moods: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load mood data: {}", e)));
                    state.loading.set(false);
                    return;
                }

                // open the calendar on the most recent recorded month
                match db.query_date_range() {
                    Ok(Some((_, newest))) => {
                        state.year.set(newest.year());
                        state.month.set(newest.month());
                    }
                    Ok(None) => {
                        log::warn!("No mood records in fixture; showing the default month");
                    }
                    Err(e) => {
                        state
                            .error_msg
                            .set(Some(format!("Failed to read data range: {}", e)));
                    }
                }

                state.db.set(Some(db));
            }
            Err(e) => {
                log::error!("Failed to create database: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to create database: {}", e)));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Re-aggregate when the displayed month changes ───
    use_effect(move || {
        let loading = (state.loading)();
        let year = (state.year)();
        let month = (state.month)();

        if loading {
            return;
        }
        // Clone the database handle out of the signal so the read borrow
        // doesn't interfere with Dioxus signal tracking.
        let db = match state.db.read().clone() {
            Some(db) => db,
            None => return,
        };

        match db.query_month(year, month) {
            Ok(events) => {
                let days = mood_core::aggregate::aggregate_days(events);
                state.month_days.set(days.into_values().collect());
                state.error_msg.set(None);
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Failed to query month: {}", e)));
            }
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 560px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                PageHeader {
                    title: "Mood Calendar".to_string(),
                    subtitle: "One cell per day -- icon, ring, or gradient depending on how often you checked in".to_string(),
                }

                MonthPicker {}
                CalendarGrid {}

                p {
                    style: "font-size: 11px; color: #888; text-align: center; margin-top: 8px;",
                    "Hover a day for its check-ins; click to open the day's detail page."
                }
            }

            MoodTooltip {}
        }
    }
}
