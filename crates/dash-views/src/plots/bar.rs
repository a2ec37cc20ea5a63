//! Bar chart series

use egui::Color32;
use egui_plot::{Bar, BarChart};

use crate::render::CartesianPoint;

const BAR_WIDTH: f64 = 0.7;

/// One bar per row with a value; rows without one leave an empty slot
pub fn bar_chart(points: &[CartesianPoint], y_field: &str, color: Color32) -> BarChart {
    let bars: Vec<Bar> = points
        .iter()
        .filter_map(|point| {
            let value = point.y?;
            let name = point.label.clone().unwrap_or_default();
            Some(Bar::new(point.x, value).width(BAR_WIDTH).name(name).fill(color))
        })
        .collect();

    BarChart::new(bars).color(color).name(y_field)
}
