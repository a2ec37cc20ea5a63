//! Chart rendering for the dashboard builder
//!
//! [`render`] turns a chart item into a backend-neutral [`ChartSpec`];
//! [`chart_view`] draws that description with egui.

pub mod chart_view;
pub mod plots;
pub mod render;

pub use chart_view::show_chart;
pub use plots::utils::colors::{palette_color, PALETTE_LEN};
pub use render::{render_chart, CartesianPoint, ChartSpec, PieSlice, SeriesStyle};
