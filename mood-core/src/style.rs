//! Mood categories and their visual style table.
//!
//! `MoodKind` is a closed enumeration with `Custom` as the open-world
//! safety net: any tag this crate does not recognize resolves to `Custom`
//! rather than failing. Adding a new kind means adding an enum variant and
//! a row in [`MoodKind::style`] -- that lookup is the only supported
//! extension point.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A mood category recorded by a check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    Happy,
    Calm,
    Anxious,
    Sad,
    Angry,
    /// User-defined mood, and the fallback for any unrecognized tag.
    #[serde(other)]
    Custom,
}

/// The {color, icon, label} triple a mood kind renders with.
///
/// `color` is an RGB hex string consumed verbatim by SVG fills and CSS
/// gradients, so it must stay in `#RRGGBB` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodStyle {
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl MoodKind {
    /// Parse a mood tag. Total: unknown tags map to `Custom`, never error.
    pub fn from_tag(tag: &str) -> MoodKind {
        match tag {
            "happy" => MoodKind::Happy,
            "calm" => MoodKind::Calm,
            "anxious" => MoodKind::Anxious,
            "sad" => MoodKind::Sad,
            "angry" => MoodKind::Angry,
            _ => MoodKind::Custom,
        }
    }

    /// The lowercase wire tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            MoodKind::Happy => "happy",
            MoodKind::Calm => "calm",
            MoodKind::Anxious => "anxious",
            MoodKind::Sad => "sad",
            MoodKind::Angry => "angry",
            MoodKind::Custom => "custom",
        }
    }

    /// Style lookup. Total by construction: every variant has exactly one row.
    pub fn style(&self) -> MoodStyle {
        match self {
            MoodKind::Happy => MoodStyle {
                color: "#FCD34D",
                icon: "\u{1F60A}",
                label: "Happy",
            },
            MoodKind::Calm => MoodStyle {
                color: "#93C5FD",
                icon: "\u{1F60C}",
                label: "Calm",
            },
            MoodKind::Anxious => MoodStyle {
                color: "#C4B5FD",
                icon: "\u{1F630}",
                label: "Anxious",
            },
            MoodKind::Sad => MoodStyle {
                color: "#9CA3AF",
                icon: "\u{1F622}",
                label: "Sad",
            },
            MoodKind::Angry => MoodStyle {
                color: "#F87171",
                icon: "\u{1F620}",
                label: "Angry",
            },
            MoodKind::Custom => MoodStyle {
                color: "#86EFAC",
                icon: "\u{1F4AD}",
                label: "Custom",
            },
        }
    }
}

impl fmt::Display for MoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
