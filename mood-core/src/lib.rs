pub mod aggregate;
pub mod donut;
pub mod event;
pub mod gradient;
pub mod strategy;
pub mod style;
