//! The single shared day tooltip.
//!
//! All day-cell strategies share one tooltip: showing a new one replaces
//! whatever is on screen, so at most one tooltip exists at any time, and
//! hiding when nothing is shown is a no-op. `TooltipManager` owns that
//! one optional tooltip behind a signal and travels inside `AppState`
//! instead of living in module-level state.

use dioxus::prelude::*;
use mood_core::event::MoodEvent;
use mood_utils::dates;

/// How many events the tooltip lists before collapsing to an overflow count.
const MAX_TOOLTIP_ENTRIES: usize = 3;

/// One listed check-in: icon, label, and HH:MM time-of-day.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub icon: &'static str,
    pub label: String,
    pub time: String,
}

/// Everything the tooltip overlay renders.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    /// Page coordinates the tooltip anchors to.
    pub x: f64,
    pub y: f64,
    /// ISO date of the day being hovered.
    pub date: String,
    /// Up to the first three events of the day.
    pub entries: Vec<TooltipEntry>,
    /// How many further events are not listed.
    pub overflow: usize,
}

impl TooltipState {
    /// Build tooltip content from a day's events (chronological).
    pub fn from_events(x: f64, y: f64, moods: &[MoodEvent]) -> TooltipState {
        let date = moods
            .first()
            .map(|m| dates::format_iso(&m.date))
            .unwrap_or_default();
        let entries = moods
            .iter()
            .take(MAX_TOOLTIP_ENTRIES)
            .map(|m| TooltipEntry {
                icon: m.kind.style().icon,
                label: m.label().to_string(),
                time: dates::format_time_hm(&m.timestamp),
            })
            .collect();
        let overflow = moods.len().saturating_sub(MAX_TOOLTIP_ENTRIES);
        TooltipState {
            x,
            y,
            date,
            entries,
            overflow,
        }
    }
}

/// Owner of the one optional tooltip.
#[derive(Clone, Copy)]
pub struct TooltipManager {
    current: Signal<Option<TooltipState>>,
}

impl TooltipManager {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
        }
    }

    /// Show a tooltip for the hovered day, replacing any existing one.
    pub fn show(&mut self, x: f64, y: f64, moods: &[MoodEvent]) {
        self.current.set(Some(TooltipState::from_events(x, y, moods)));
    }

    /// Remove the tooltip. Idempotent.
    pub fn hide(&mut self) {
        self.current.set(None);
    }

    /// The tooltip currently on screen, if any.
    pub fn current(&self) -> Option<TooltipState> {
        (self.current)()
    }
}

impl Default for TooltipManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay component rendering the shared tooltip. Mount once at app root.
#[component]
pub fn MoodTooltip() -> Element {
    let state = use_context::<crate::state::AppState>();
    let Some(tooltip) = state.tooltip.current() else {
        return rsx! {};
    };

    let style = format!(
        "position: absolute; z-index: 50; top: {}px; left: {}px; \
         background: white; border: 1px solid #E5E7EB; border-radius: 8px; \
         box-shadow: 0 4px 12px rgba(0,0,0,0.15); padding: 12px; max-width: 260px; \
         pointer-events: none;",
        tooltip.y + 10.0,
        tooltip.x + 10.0,
    );

    rsx! {
        div {
            style: "{style}",
            div {
                style: "font-weight: 600; font-size: 13px; margin-bottom: 6px;",
                "{tooltip.date} check-ins"
            }
            for entry in tooltip.entries.iter() {
                div {
                    style: "display: flex; justify-content: space-between; gap: 12px; padding: 2px 0; font-size: 13px;",
                    span {
                        span { style: "margin-right: 6px;", "{entry.icon}" }
                        "{entry.label}"
                    }
                    span { style: "color: #6B7280; font-size: 12px;", "{entry.time}" }
                }
            }
            if tooltip.overflow > 0 {
                div {
                    style: "font-size: 12px; color: #6B7280; padding-top: 4px;",
                    "{tooltip.overflow} more..."
                }
            }
            div {
                style: "font-size: 11px; color: #9CA3AF; padding-top: 6px;",
                "Click to view details"
            }
        }
    }
}
