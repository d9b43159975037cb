//! Per-day rollup of mood events.
//!
//! The calendar view works with one `DayAggregate` per day: the day's
//! events in chronological order, the representative "primary" mood, the
//! record count, and the mean intensity. The renderer treats aggregates as
//! read-only values; everything here is recomputed per query, nothing is
//! persisted.

use crate::event::MoodEvent;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rollup of all mood events for one calendar day.
///
/// `count == moods.len()` holds for aggregates built by
/// [`DayAggregate::from_events`]. Aggregates received from elsewhere are
/// trusted as-is: strategy selection reads `count` without revalidating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAggregate {
    /// All events for the day, chronological.
    pub moods: Vec<MoodEvent>,
    /// The representative event used to label the day.
    /// Serialized as `primary_mood` to match the rollup format on the wire.
    #[serde(rename = "primary_mood")]
    pub primary: MoodEvent,
    /// Number of events.
    pub count: usize,
    /// Mean intensity across the day, 0..=10.
    pub avg_intensity: f64,
}

impl DayAggregate {
    /// Build an aggregate from one day's events.
    ///
    /// Returns `None` for an empty slice. Events are sorted by timestamp,
    /// and the primary mood is the most frequent kind; ties break to the
    /// kind whose latest event is most recent.
    pub fn from_events(mut events: Vec<MoodEvent>) -> Option<DayAggregate> {
        if events.is_empty() {
            return None;
        }
        events.sort_by_key(|e| e.timestamp);

        let count = events.len();
        let avg_intensity = events.iter().map(|e| e.intensity).sum::<f64>() / count as f64;
        let primary = pick_primary(&events);

        Some(DayAggregate {
            moods: events,
            primary,
            count,
            avg_intensity,
        })
    }

    /// The calendar date this aggregate belongs to (date of the first event).
    pub fn date(&self) -> NaiveDate {
        self.moods[0].date
    }
}

/// Most frequent kind wins; among kinds with equal frequency, the one whose
/// latest event is most recent wins. Returns the latest event of the winner
/// so the primary carries a real timestamp and intensity.
fn pick_primary(events: &[MoodEvent]) -> MoodEvent {
    let mut freq: BTreeMap<&'static str, (usize, &MoodEvent)> = BTreeMap::new();
    for event in events {
        let entry = freq.entry(event.kind.tag()).or_insert((0, event));
        entry.0 += 1;
        // events are chronological, so the current one is the latest so far
        entry.1 = event;
    }

    let mut winner: Option<(usize, &MoodEvent)> = None;
    for (count, latest) in freq.values() {
        let better = match winner {
            None => true,
            Some((best_count, best_latest)) => {
                *count > best_count
                    || (*count == best_count && latest.timestamp > best_latest.timestamp)
            }
        };
        if better {
            winner = Some((*count, latest));
        }
    }
    // events is non-empty, so winner is always set
    winner.map(|(_, e)| e.clone()).unwrap_or_else(|| events[0].clone())
}

/// Group a month (or any span) of events into per-day aggregates.
pub fn aggregate_days(events: Vec<MoodEvent>) -> BTreeMap<NaiveDate, DayAggregate> {
    let mut by_date: BTreeMap<NaiveDate, Vec<MoodEvent>> = BTreeMap::new();
    for event in events {
        by_date.entry(event.date).or_default().push(event);
    }

    let mut days = BTreeMap::new();
    for (date, day_events) in by_date {
        if let Some(aggregate) = DayAggregate::from_events(day_events) {
            days.insert(date, aggregate);
        }
    }
    log::debug!("aggregated {} days", days.len());
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::MoodKind;

    fn event(kind: MoodKind, intensity: f64, hour: u32) -> MoodEvent {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        MoodEvent {
            kind,
            custom_label: None,
            intensity,
            date,
            timestamp: date.and_hms_opt(hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_events_yield_no_aggregate() {
        assert!(DayAggregate::from_events(Vec::new()).is_none());
    }

    #[test]
    fn single_event_aggregate() {
        let day = DayAggregate::from_events(vec![event(MoodKind::Calm, 6.0, 9)]).unwrap();
        assert_eq!(day.count, 1);
        assert_eq!(day.primary.kind, MoodKind::Calm);
        assert!((day.avg_intensity - 6.0).abs() < 1e-9);
    }

    #[test]
    fn count_matches_moods_len_and_order_is_chronological() {
        let day = DayAggregate::from_events(vec![
            event(MoodKind::Sad, 3.0, 20),
            event(MoodKind::Happy, 7.0, 8),
            event(MoodKind::Happy, 5.0, 13),
        ])
        .unwrap();
        assert_eq!(day.count, day.moods.len());
        assert_eq!(day.count, 3);
        let hours: Vec<u32> = day
            .moods
            .iter()
            .map(|e| chrono::Timelike::hour(&e.timestamp))
            .collect();
        assert_eq!(hours, vec![8, 13, 20]);
    }

    #[test]
    fn primary_is_most_frequent_kind() {
        let day = DayAggregate::from_events(vec![
            event(MoodKind::Happy, 7.0, 8),
            event(MoodKind::Happy, 5.0, 13),
            event(MoodKind::Sad, 3.0, 20),
        ])
        .unwrap();
        assert_eq!(day.primary.kind, MoodKind::Happy);
        // latest happy event, not the first one
        assert!((day.primary.intensity - 5.0).abs() < 1e-9);
    }

    #[test]
    fn frequency_tie_breaks_to_most_recent() {
        let day = DayAggregate::from_events(vec![
            event(MoodKind::Happy, 7.0, 8),
            event(MoodKind::Sad, 3.0, 20),
        ])
        .unwrap();
        // 1-1 tie: sad was recorded later
        assert_eq!(day.primary.kind, MoodKind::Sad);
    }

    #[test]
    fn average_intensity_is_the_mean() {
        let day = DayAggregate::from_events(vec![
            event(MoodKind::Happy, 7.0, 8),
            event(MoodKind::Happy, 5.0, 13),
            event(MoodKind::Sad, 3.0, 20),
        ])
        .unwrap();
        assert!((day.avg_intensity - 5.0).abs() < 1e-9);
    }

    #[test]
    fn aggregate_days_groups_by_date() {
        let d1 = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        let mut e1 = event(MoodKind::Happy, 7.0, 8);
        e1.date = d1;
        let mut e2 = event(MoodKind::Calm, 4.0, 9);
        e2.date = d2;
        e2.timestamp = d2.and_hms_opt(9, 0, 0).unwrap();
        let mut e3 = event(MoodKind::Sad, 2.0, 21);
        e3.date = d2;
        e3.timestamp = d2.and_hms_opt(21, 0, 0).unwrap();

        let days = aggregate_days(vec![e3, e1, e2]);
        assert_eq!(days.len(), 2);
        assert_eq!(days[&d1].count, 1);
        assert_eq!(days[&d2].count, 2);
        assert_eq!(days[&d2].date(), d2);
    }

    #[test]
    fn json_field_is_primary_mood_both_ways() {
        let json = r#"{
            "moods": [{
                "mood_type": "happy",
                "intensity": 7.0,
                "date": "2024-03-15",
                "timestamp": "2024-03-15T08:00:00"
            }],
            "primary_mood": {
                "mood_type": "happy",
                "intensity": 7.0,
                "date": "2024-03-15",
                "timestamp": "2024-03-15T08:00:00"
            },
            "count": 1,
            "avg_intensity": 7.0
        }"#;
        let parsed: DayAggregate = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.primary.kind, MoodKind::Happy);
        assert_eq!(parsed.count, 1);

        let value: serde_json::Value = serde_json::to_value(&parsed).unwrap();
        assert!(value.get("primary_mood").is_some());
        assert!(value.get("primary").is_none(), "the field name must not leak");
    }
}
