//! Line chart series

use egui::Color32;
use egui_plot::{Line, PlotPoints};

use crate::render::CartesianPoint;

const LINE_WIDTH: f32 = 2.0;

/// Split the series at missing values so gaps are not bridged
pub fn line_segments(points: &[CartesianPoint]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for point in points {
        match point.y {
            Some(y) => current.push([point.x, y]),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// One `Line` per contiguous segment, all sharing a legend entry
pub fn line_series(points: &[CartesianPoint], y_field: &str, color: Color32) -> Vec<Line> {
    line_segments(points)
        .into_iter()
        .map(|segment| {
            Line::new(PlotPoints::new(segment))
                .color(color)
                .width(LINE_WIDTH)
                .name(y_field)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: Option<f64>) -> CartesianPoint {
        CartesianPoint { x, label: None, y }
    }

    #[test]
    fn test_segments_break_at_gaps() {
        let points = vec![
            point(0.0, Some(1.0)),
            point(1.0, Some(2.0)),
            point(2.0, None),
            point(3.0, Some(4.0)),
        ];
        let segments = line_segments(&points);
        assert_eq!(segments, vec![vec![[0.0, 1.0], [1.0, 2.0]], vec![[3.0, 4.0]]]);
    }

    #[test]
    fn test_no_values_no_segments() {
        let points = vec![point(0.0, None), point(1.0, None)];
        assert!(line_segments(&points).is_empty());
    }
}
