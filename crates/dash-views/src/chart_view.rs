//! Draws a chart item inside a dashboard card

use egui::{RichText, Ui};
use egui_plot::{Legend, Plot};

use dash_core::ChartItem;
use dash_data::Dataset;

use crate::plots::{self, utils::colors::palette_color};
use crate::render::{render_chart, CartesianPoint, ChartSpec, SeriesStyle};

/// Render `item` against `dataset` at the item's configured height
pub fn show_chart(ui: &mut Ui, item: &ChartItem, dataset: &Dataset) {
    let height = item.config.height as f32;
    let spec = render_chart(item, dataset);

    let has_values = spec.has_values();
    if !has_values {
        tracing::debug!(
            "'{}' has nothing to draw (x: '{}', y: '{}')",
            item.name,
            item.config.x_axis,
            item.config.y_axis
        );
    }

    match spec {
        ChartSpec::Cartesian {
            style,
            x_field,
            y_field,
            color_index,
            points,
        } => show_cartesian(ui, item, style, &x_field, &y_field, color_index, &points, height),
        ChartSpec::Pie { slices, .. } => plots::show_pie(ui, &slices, height),
    }

    if !has_values {
        ui.label(RichText::new(format!("No data for '{}'", item.config.y_axis)).small().weak());
    }
}

#[allow(clippy::too_many_arguments)]
fn show_cartesian(
    ui: &mut Ui,
    item: &ChartItem,
    style: SeriesStyle,
    x_field: &str,
    y_field: &str,
    color_index: usize,
    points: &[CartesianPoint],
    height: f32,
) {
    let color = palette_color(color_index);
    let labels: Vec<String> = points
        .iter()
        .map(|p| p.label.clone().unwrap_or_default())
        .collect();

    let plot = Plot::new(item.id.as_str())
        .height(height)
        .legend(Legend::default())
        .show_grid(true)
        .x_axis_label(x_field)
        .y_axis_label(y_field)
        .include_y(0.0)
        .allow_scroll(false)
        .x_axis_formatter(move |val, _max_chars, _range| tick_label(&labels, val));

    plot.show(ui, |plot_ui| match style {
        SeriesStyle::Bars => plot_ui.bar_chart(plots::bar_chart(points, y_field, color)),
        SeriesStyle::Line => {
            for line in plots::line_series(points, y_field, color) {
                plot_ui.line(line);
            }
        }
        SeriesStyle::Points => plot_ui.points(plots::scatter_points(points, y_field, color)),
    });
}

/// Category label for an x tick; only whole row positions are labelled
fn tick_label(labels: &[String], val: f64) -> String {
    let rounded = val.round();
    if (val - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_labels() {
        let labels = vec!["Jan".to_string(), "Feb".to_string()];
        assert_eq!(tick_label(&labels, 0.0), "Jan");
        assert_eq!(tick_label(&labels, 1.0), "Feb");
        assert_eq!(tick_label(&labels, 0.5), "");
        assert_eq!(tick_label(&labels, -1.0), "");
        assert_eq!(tick_label(&labels, 7.0), "");
    }
}
