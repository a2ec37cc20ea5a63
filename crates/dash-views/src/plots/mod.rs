//! Plot builders for each chart kind

pub mod bar;
pub mod line;
pub mod pie;
pub mod scatter;

// Utilities
pub mod utils;

// Re-exports
pub use bar::bar_chart;
pub use line::line_series;
pub use pie::show_pie;
pub use scatter::scatter_points;
