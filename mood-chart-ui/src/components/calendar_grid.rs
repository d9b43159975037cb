//! Month grid of day cells.

use crate::state::AppState;
use dioxus::prelude::*;
use mood_core::aggregate::DayAggregate;
use mood_utils::dates;

use super::MoodDayCell;

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// The calendar for the month selected in `AppState`: a weekday header
/// row, leading blanks up to the first day's column, then one
/// [`MoodDayCell`] per day of the month.
#[component]
pub fn CalendarGrid() -> Element {
    let state = use_context::<AppState>();
    let year = (state.year)();
    let month = (state.month)();
    let size = (state.cell_size)();
    let month_days = state.month_days.read().clone();

    let day_count = dates::days_in_month(year, month);
    let offset = dates::first_weekday_offset(year, month);

    // index rollups by day-of-month for the cell loop
    let day_for = |day: u32| -> Option<DayAggregate> {
        month_days
            .iter()
            .find(|aggregate| chrono::Datelike::day(&aggregate.date()) == day)
            .cloned()
    };

    let grid_style = format!(
        "display: grid; grid-template-columns: repeat(7, {}px); gap: 6px; justify-content: center;",
        size,
    );

    rsx! {
        div {
            div {
                style: "{grid_style} margin-bottom: 4px;",
                for label in WEEKDAY_LABELS.iter() {
                    div {
                        style: "text-align: center; font-size: 11px; color: #6B7280; font-weight: 600;",
                        "{label}"
                    }
                }
            }
            div {
                style: "{grid_style}",
                for _ in 0..offset {
                    div {}
                }
                for day in 1..=day_count {
                    MoodDayCell {
                        day_of_month: day,
                        day: day_for(day),
                        size,
                    }
                }
            }
        }
    }
}
