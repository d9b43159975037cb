//! Day cell renderer.
//!
//! Picks one of five visual strategies for a calendar day based on its
//! record count (see `mood_core::strategy`) and draws it. Hover and click
//! behavior is identical for every non-empty strategy and lives in one
//! place, [`DayCellFrame`]: hover shows the shared tooltip, click
//! navigates to the day's detail page. The empty cell attaches neither.

use crate::nav;
use crate::state::AppState;
use dioxus::prelude::*;
use mood_core::aggregate::DayAggregate;
use mood_core::donut::build_donut;
use mood_core::event::MoodEvent;
use mood_core::gradient::intensity_gradient;
use mood_core::strategy::RenderStrategy;

use super::DonutSvg;

/// Props for MoodDayCell
#[derive(Props, Clone, PartialEq)]
pub struct MoodDayCellProps {
    /// Day-of-month number printed inside the cell.
    pub day_of_month: u32,
    /// The day's rollup; None renders the empty placeholder.
    #[props(default)]
    pub day: Option<DayAggregate>,
    /// Cell edge length in pixels.
    #[props(default = 60.0)]
    pub size: f64,
}

/// One calendar day cell.
#[component]
pub fn MoodDayCell(props: MoodDayCellProps) -> Element {
    let size = props.size;
    let day_of_month = props.day_of_month;

    let day = match props.day {
        Some(day) if !day.moods.is_empty() => day,
        _ => return rsx! { EmptyDayCell { day_of_month, size } },
    };

    match RenderStrategy::for_day(Some(&day)) {
        RenderStrategy::Empty => rsx! { EmptyDayCell { day_of_month, size } },
        RenderStrategy::Single => {
            // light wash of the mood's color (hex + alpha suffix)
            let background = format!("{}30", day.primary.kind.style().color);
            rsx! {
                DayCellFrame {
                    moods: day.moods.clone(),
                    size,
                    background,
                    SingleMoodView { day: day.clone(), day_of_month }
                }
            }
        }
        RenderStrategy::Multi => rsx! {
            DayCellFrame {
                moods: day.moods.clone(),
                size,
                background: "#F9FAFB".to_string(),
                MultiMoodView { day: day.clone(), day_of_month }
            }
        },
        RenderStrategy::Donut => rsx! {
            DayCellFrame {
                moods: day.moods.clone(),
                size,
                background: "#F3E8FF".to_string(),
                border_color: "#D8B4FE".to_string(),
                DonutDayView { day: day.clone(), day_of_month, size }
            }
        },
        RenderStrategy::Aggregated => {
            let background = intensity_gradient(day.primary.kind, day.avg_intensity);
            rsx! {
                DayCellFrame {
                    moods: day.moods.clone(),
                    size,
                    background,
                    border_color: "#A5B4FC".to_string(),
                    AggregatedDayView { day: day.clone(), day_of_month }
                }
            }
        }
    }
}

/// Props for DayCellFrame
#[derive(Props, Clone, PartialEq)]
pub struct DayCellFrameProps {
    /// The day's events, chronological; drives the tooltip and the
    /// navigation target (ISO date of the first event).
    pub moods: Vec<MoodEvent>,
    pub size: f64,
    /// CSS background (solid color or gradient).
    #[props(default = String::new())]
    pub background: String,
    #[props(default = "#E5E7EB".to_string())]
    pub border_color: String,
    pub children: Element,
}

/// The one shared interaction wrapper for all non-empty strategies.
#[component]
pub fn DayCellFrame(props: DayCellFrameProps) -> Element {
    let state = use_context::<AppState>();
    let mut tooltip = state.tooltip;

    let hover_moods = props.moods.clone();
    let nav_date = props.moods.first().map(|m| m.date);

    let style = format!(
        "position: relative; width: {}px; height: {}px; border: 2px solid {}; \
         border-radius: 8px; background: {}; cursor: pointer; box-sizing: border-box;",
        props.size, props.size, props.border_color, props.background,
    );

    rsx! {
        div {
            style: "{style}",
            onmouseenter: move |evt: Event<MouseData>| {
                let point = evt.page_coordinates();
                tooltip.show(point.x, point.y, &hover_moods);
            },
            onmouseleave: move |_| tooltip.hide(),
            onclick: move |_| {
                if let Some(date) = nav_date {
                    nav::go_to_day(date);
                }
            },
            {props.children}
        }
    }
}

/// Props for EmptyDayCell
#[derive(Props, Clone, PartialEq)]
pub struct EmptyDayCellProps {
    pub day_of_month: u32,
    pub size: f64,
}

/// Neutral placeholder for a day without check-ins. No interactivity.
#[component]
pub fn EmptyDayCell(props: EmptyDayCellProps) -> Element {
    let style = format!(
        "width: {}px; height: {}px; border: 2px solid #E5E7EB; border-radius: 8px; \
         background: #F9FAFB; display: flex; align-items: center; justify-content: center; \
         box-sizing: border-box;",
        props.size, props.size,
    );
    rsx! {
        div {
            style: "{style}",
            span { style: "color: #9CA3AF; font-size: 11px;", "--" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StrategyViewProps {
    day: DayAggregate,
    day_of_month: u32,
}

/// One icon plus the day number.
#[component]
fn SingleMoodView(props: StrategyViewProps) -> Element {
    let icon = props.day.primary.kind.style().icon;
    rsx! {
        div {
            style: "height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center;",
            div { style: "font-size: 22px; line-height: 1;", "{icon}" }
            div { style: "font-size: 11px; margin-top: 2px;", "{props.day_of_month}" }
        }
    }
}

/// A row of icons, the day number, and a count label.
#[component]
fn MultiMoodView(props: StrategyViewProps) -> Element {
    rsx! {
        div {
            style: "height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center;",
            div {
                style: "display: flex; gap: 2px;",
                for mood in props.day.moods.iter() {
                    span { style: "font-size: 15px; line-height: 1;", "{mood.kind.style().icon}" }
                }
            }
            div { style: "font-size: 11px; font-weight: 500; margin-top: 2px;", "{props.day_of_month}" }
            div { style: "font-size: 10px; color: #6B7280;", "{props.day.count}x" }
        }
    }
}

/// Props for DonutDayView
#[derive(Props, Clone, PartialEq)]
struct DonutDayViewProps {
    day: DayAggregate,
    day_of_month: u32,
    size: f64,
}

/// Ring chart with the primary icon and day number overlaid, plus a count badge.
#[component]
fn DonutDayView(props: DonutDayViewProps) -> Element {
    let chart = build_donut(&props.day.moods, props.size * 0.8);
    let icon = props.day.primary.kind.style().icon;
    rsx! {
        div {
            style: "height: 100%; display: flex; align-items: center; justify-content: center; position: relative;",
            div {
                style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center;",
                DonutSvg { chart }
            }
            div {
                style: "position: relative; z-index: 10; text-align: center;",
                div { style: "font-size: 15px; line-height: 1;", "{icon}" }
                div { style: "font-size: 11px; font-weight: 500;", "{props.day_of_month}" }
            }
            CountBadge { count: props.day.count, color: "#9333EA" }
        }
    }
}

/// Primary icon over an intensity gradient, with count badge and intensity tag.
#[component]
fn AggregatedDayView(props: StrategyViewProps) -> Element {
    let icon = props.day.primary.kind.style().icon;
    let intensity = props.day.avg_intensity.round() as i64;
    rsx! {
        div {
            style: "height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center; position: relative;",
            div { style: "font-size: 22px; line-height: 1;", "{icon}" }
            div { style: "font-size: 11px; font-weight: 500; margin-top: 2px;", "{props.day_of_month}" }
            CountBadge { count: props.day.count, color: "#4F46E5" }
            div {
                style: "position: absolute; bottom: 0; right: 0; background: rgba(0,0,0,0.2); \
                        color: white; font-size: 9px; padding: 0 3px; border-radius: 3px;",
                "lvl {intensity}"
            }
        }
    }
}

/// Props for CountBadge
#[derive(Props, Clone, PartialEq)]
struct CountBadgeProps {
    count: usize,
    color: &'static str,
}

/// Small round record-count badge pinned to the top-right corner.
#[component]
fn CountBadge(props: CountBadgeProps) -> Element {
    let style = format!(
        "position: absolute; top: -2px; right: -2px; background: {}; color: white; \
         font-size: 10px; border-radius: 9999px; min-width: 16px; height: 16px; \
         display: flex; align-items: center; justify-content: center; font-weight: 600;",
        props.color,
    );
    rsx! {
        div { style: "{style}", "{props.count}" }
    }
}
