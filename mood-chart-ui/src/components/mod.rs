//! Reusable Dioxus RSX components for the mood calendar.

mod calendar_grid;
mod donut_svg;
mod error_display;
mod loading_spinner;
mod month_picker;
mod mood_day_cell;
mod page_header;

pub use calendar_grid::CalendarGrid;
pub use donut_svg::DonutSvg;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use month_picker::MonthPicker;
pub use mood_day_cell::MoodDayCell;
pub use page_header::PageHeader;
