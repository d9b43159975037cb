//! A single mood check-in.

use crate::style::MoodKind;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One timestamped mood record. Immutable once fetched; the calendar and
/// renderer only read these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEvent {
    /// Mood category. Unknown wire tags deserialize to `MoodKind::Custom`.
    /// Serialized as `mood_type` to match the record format on the wire.
    #[serde(rename = "mood_type")]
    pub kind: MoodKind,
    /// Display name for a `custom` mood, if the user supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,
    /// Intensity on a 0..=10 scale.
    pub intensity: f64,
    /// Calendar day the check-in belongs to.
    pub date: NaiveDate,
    /// Exact time the check-in was recorded.
    pub timestamp: NaiveDateTime,
}

impl MoodEvent {
    /// Display label: the custom label when present, the style label otherwise.
    pub fn label(&self) -> &str {
        match &self.custom_label {
            Some(label) if !label.is_empty() => label,
            _ => self.kind.style().label,
        }
    }
}
