//! Data models for the GDP chart
//!
//! The dataset as loaded, the chart built from it, and the page the chart is rendered into.

pub mod chart;
pub mod dataset;
pub mod page;

// Re-export commonly used types for convenience
pub use chart::{Axis, AxisOrient, Bar, Chart, Listeners, Tick, Title};
pub use dataset::Dataset;
pub use page::{Page, Tooltip, TooltipHandle, CANVAS_ID, TOOLTIP_ID};
