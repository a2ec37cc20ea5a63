//! Scatter plot series

use egui::Color32;
use egui_plot::{MarkerShape, PlotPoints, Points};

use crate::render::CartesianPoint;

const POINT_RADIUS: f32 = 4.0;

pub fn scatter_points(points: &[CartesianPoint], y_field: &str, color: Color32) -> Points {
    let coords: Vec<[f64; 2]> = points
        .iter()
        .filter_map(|point| point.y.map(|y| [point.x, y]))
        .collect();

    Points::new(PlotPoints::new(coords))
        .shape(MarkerShape::Circle)
        .filled(true)
        .radius(POINT_RADIUS)
        .color(color)
        .name(y_field)
}
