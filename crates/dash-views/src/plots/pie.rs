//! Pie chart drawn directly with the egui painter

use std::f32::consts::TAU;

use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};

use super::utils::colors::palette_color;
use crate::render::PieSlice;

const OUTER_RADIUS: f32 = 80.0;
const LABEL_OFFSET: f32 = 18.0;

/// Start and end angle of every slice, in radians clockwise from 3 o'clock.
///
/// Slices without a positive value get `None` and take no space.
pub fn slice_angles(slices: &[PieSlice]) -> Vec<Option<(f32, f32)>> {
    let total: f64 = slices
        .iter()
        .filter_map(|s| s.value)
        .filter(|v| *v > 0.0)
        .sum();

    let mut start = 0.0_f32;
    slices
        .iter()
        .map(|slice| {
            let value = slice.value.filter(|v| *v > 0.0 && total > 0.0)?;
            let end = start + (value / total) as f32 * TAU;
            let span = (start, end);
            start = end;
            Some(span)
        })
        .collect()
}

/// Index of the slice under an angle, if any
fn slice_at(angles: &[Option<(f32, f32)>], angle: f32) -> Option<usize> {
    angles
        .iter()
        .position(|span| matches!(span, Some((start, end)) if angle >= *start && angle < *end))
}

/// Draw the pie into a `height`-tall area of the available width
pub fn show_pie(ui: &mut Ui, slices: &[PieSlice], height: f32) {
    let size = Vec2::new(ui.available_width(), height);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    let angles = slice_angles(slices);

    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = OUTER_RADIUS.min(rect.height() / 2.0 - LABEL_OFFSET).max(10.0);
    let text_color = ui.visuals().text_color();

    for (slice, span) in slices.iter().zip(&angles) {
        let Some((start, end)) = *span else { continue };
        draw_wedge(&painter, center, radius, start, end, palette_color(slice.color_index));

        let mid = (start + end) / 2.0;
        let label_pos = center + Vec2::angled(mid) * (radius + LABEL_OFFSET);
        painter.text(
            label_pos,
            Align2::CENTER_CENTER,
            format!("{}: {}", slice.label, format_value(slice.value.unwrap_or_default())),
            FontId::proportional(10.0),
            text_color,
        );
    }

    if let Some(hover_pos) = response.hover_pos() {
        let offset = hover_pos - center;
        if offset.length() <= radius {
            let angle = offset.y.atan2(offset.x).rem_euclid(TAU);
            if let Some(index) = slice_at(&angles, angle) {
                let slice = &slices[index];
                response.on_hover_text(format!(
                    "{}: {}",
                    slice.label,
                    format_value(slice.value.unwrap_or_default())
                ));
            }
        }
    }
}

/// Fill a wedge as a fan of small convex pieces
fn draw_wedge(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start: f32,
    end: f32,
    color: Color32,
) {
    let steps = (((end - start) / TAU) * 90.0).ceil().max(1.0) as usize;
    let step = (end - start) / steps as f32;

    for i in 0..steps {
        let a0 = start + step * i as f32;
        let a1 = a0 + step;
        painter.add(Shape::convex_polygon(
            vec![center, center + Vec2::angled(a0) * radius, center + Vec2::angled(a1) * radius],
            color,
            Stroke::NONE,
        ));
    }

    // Slice separators
    let edge = Stroke::new(1.0, Color32::from_gray(240));
    painter.line_segment([center, center + Vec2::angled(start) * radius], edge);
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(value: Option<f64>, color_index: usize) -> PieSlice {
        PieSlice {
            label: format!("s{}", color_index),
            value,
            color_index,
        }
    }

    #[test]
    fn test_angles_cover_full_circle() {
        let slices = vec![slice(Some(1.0), 0), slice(Some(1.0), 1), slice(Some(2.0), 2)];
        let angles = slice_angles(&slices);

        let (start, _) = angles[0].unwrap();
        let (_, end) = angles[2].unwrap();
        assert_eq!(start, 0.0);
        assert!((end - TAU).abs() < 1e-5);

        let (s, e) = angles[2].unwrap();
        assert!(((e - s) - TAU / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_missing_values_take_no_space() {
        let slices = vec![slice(None, 0), slice(Some(3.0), 1), slice(Some(0.0), 2)];
        let angles = slice_angles(&slices);
        assert_eq!(angles[0], None);
        assert_eq!(angles[2], None);
        assert_eq!(angles[1], Some((0.0, TAU)));
    }

    #[test]
    fn test_all_missing() {
        let slices = vec![slice(None, 0), slice(None, 1)];
        assert!(slice_angles(&slices).iter().all(Option::is_none));
    }

    #[test]
    fn test_slice_at_angle() {
        let slices = vec![slice(Some(1.0), 0), slice(Some(1.0), 1)];
        let angles = slice_angles(&slices);
        assert_eq!(slice_at(&angles, 0.5), Some(0));
        assert_eq!(slice_at(&angles, TAU / 2.0 + 0.1), Some(1));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(9800.0), "9800");
        assert_eq!(format_value(1.5), "1.50");
    }
}
