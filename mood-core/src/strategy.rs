//! Render-strategy selection for a calendar day cell.
//!
//! A day renders differently depending on how many check-ins it holds.
//! The selection order below is a contract the UI must preserve exactly:
//!
//! | condition                    | strategy   |
//! |------------------------------|------------|
//! | day absent or no events      | Empty      |
//! | count == 1                   | Single     |
//! | count <= 2                   | Multi      |
//! | count <= 4                   | Donut      |
//! | count > 4                    | Aggregated |

use crate::aggregate::DayAggregate;

/// How a day cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStrategy {
    /// Neutral placeholder, no interactivity.
    Empty,
    /// One icon plus the day-of-month number.
    Single,
    /// A row of icons plus day number and count label.
    Multi,
    /// Ring chart with one arc per distinct kind, primary icon overlaid.
    Donut,
    /// Primary icon with an intensity-driven gradient background.
    Aggregated,
}

impl RenderStrategy {
    /// Select the strategy for a day.
    ///
    /// Emptiness is decided from `moods`; all other thresholds read the
    /// caller-supplied `count` without revalidating it against `moods.len()`.
    pub fn for_day(day: Option<&DayAggregate>) -> RenderStrategy {
        let day = match day {
            Some(day) if !day.moods.is_empty() => day,
            _ => return RenderStrategy::Empty,
        };
        Self::for_count(day.count)
    }

    /// Threshold table over the record count. `for_count(0)` maps to Empty
    /// for consistency, though `for_day` never reaches it with 0.
    pub fn for_count(count: usize) -> RenderStrategy {
        match count {
            0 => RenderStrategy::Empty,
            1 => RenderStrategy::Single,
            2 => RenderStrategy::Multi,
            3 | 4 => RenderStrategy::Donut,
            _ => RenderStrategy::Aggregated,
        }
    }
}
