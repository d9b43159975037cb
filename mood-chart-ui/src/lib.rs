//! Shared Dioxus components and state for the mood calendar app.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `tooltip`: The single shared tooltip (manager + overlay component)
//! - `nav`: Browser navigation to the per-date detail page
//! - `components`: Reusable RSX components (calendar grid, day cells, donut SVG, etc.)

pub mod nav;
pub mod state;
pub mod tooltip;
pub mod components;
