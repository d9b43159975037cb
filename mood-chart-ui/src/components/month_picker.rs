//! Month navigation: previous/next buttons around the current month label.

use crate::state::AppState;
use dioxus::prelude::*;
use mood_utils::dates;

/// Prev/next month controls for the calendar.
#[component]
pub fn MonthPicker() -> Element {
    let mut state = use_context::<AppState>();
    let year = (state.year)();
    let month = (state.month)();

    let on_prev = move |_| {
        let (y, m) = dates::prev_month((state.year)(), (state.month)());
        state.year.set(y);
        state.month.set(m);
    };

    let on_next = move |_| {
        let (y, m) = dates::next_month((state.year)(), (state.month)());
        state.year.set(y);
        state.month.set(m);
    };

    let button_style = "padding: 4px 10px; border: 1px solid #D1D5DB; border-radius: 6px; \
                        background: white; cursor: pointer; font-size: 13px;";

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; justify-content: center;",
            button {
                style: "{button_style}",
                onclick: on_prev,
                "\u{2039} Prev"
            }
            span {
                style: "font-weight: bold; min-width: 140px; text-align: center;",
                "{dates::month_name(month)} {year}"
            }
            button {
                style: "{button_style}",
                onclick: on_next,
                "Next \u{203A}"
            }
        }
    }
}
