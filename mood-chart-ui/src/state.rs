//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::tooltip::TooltipManager;
use dioxus::prelude::*;
use mood_core::aggregate::DayAggregate;
use mood_db::Database;

/// Default edge length of a day cell in pixels.
pub const DEFAULT_CELL_SIZE: f64 = 60.0;

/// Shared application state for the mood calendar.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Year of the displayed month
    pub year: Signal<i32>,
    /// Displayed month (1-12)
    pub month: Signal<u32>,
    /// Per-day rollups for the displayed month
    pub month_days: Signal<Vec<DayAggregate>>,
    /// Day cell size in pixels
    pub cell_size: Signal<f64>,
    /// The one shared tooltip; showing replaces, hiding is idempotent
    pub tooltip: TooltipManager,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            year: Signal::new(2024),
            month: Signal::new(1),
            month_days: Signal::new(Vec::new()),
            cell_size: Signal::new(DEFAULT_CELL_SIZE),
            tooltip: TooltipManager::new(),
        }
    }
}
