//! Browser navigation to the per-date detail page.

use chrono::NaiveDate;
use mood_utils::dates;

/// Navigate to the detail view for one day.
///
/// The `/mood/date/{ISO-date}` URL pattern is a fixed contract with the
/// routing layer and must be preserved verbatim. Navigation failures are
/// logged, never raised -- a dead link must not take the calendar down.
pub fn go_to_day(date: NaiveDate) {
    let href = format!("/mood/date/{}", dates::format_iso(&date));
    let Some(window) = web_sys::window() else {
        log::warn!("nav: no window object, cannot navigate to {}", href);
        return;
    };
    if let Err(err) = window.location().set_href(&href) {
        log::warn!("nav: navigation to {} failed: {:?}", href, err);
    }
}
