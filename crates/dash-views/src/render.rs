//! Chart descriptions derived from a chart item and the dataset
//!
//! [`render_chart`] is a pure function: the same item and dataset always give
//! the same [`ChartSpec`]. Nothing is cached; the dataset is tiny and the
//! description is rebuilt every frame.

use dash_core::{ChartItem, ChartKind};
use dash_data::Dataset;

/// Palette index of each cartesian series
const BAR_COLOR: usize = 0;
const LINE_COLOR: usize = 1;
const SCATTER_COLOR: usize = 3;

/// How a cartesian series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Bars,
    Line,
    Points,
}

/// One row of a cartesian chart
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianPoint {
    /// Position on the categorical axis (the row index)
    pub x: f64,

    /// Tick label from the x field, `None` if the field is unknown
    pub label: Option<String>,

    /// Value from the y field, `None` if unknown or not numeric
    pub y: Option<f64>,
}

/// One row of a pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: Option<f64>,
    pub color_index: usize,
}

/// Backend-neutral description of a chart
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Cartesian {
        style: SeriesStyle,
        x_field: String,
        y_field: String,
        color_index: usize,
        points: Vec<CartesianPoint>,
    },
    Pie {
        value_field: String,
        slices: Vec<PieSlice>,
    },
}

impl ChartSpec {
    /// Whether there is at least one value to draw
    pub fn has_values(&self) -> bool {
        match self {
            ChartSpec::Cartesian { points, .. } => points.iter().any(|p| p.y.is_some()),
            ChartSpec::Pie { slices, .. } => slices.iter().any(|s| s.value.is_some()),
        }
    }
}

/// Describe a chart over every row of the dataset
pub fn render_chart(item: &ChartItem, dataset: &Dataset) -> ChartSpec {
    match item.kind {
        ChartKind::Bar => cartesian(item, dataset, SeriesStyle::Bars, BAR_COLOR),
        ChartKind::Line => cartesian(item, dataset, SeriesStyle::Line, LINE_COLOR),
        ChartKind::Scatter => cartesian(item, dataset, SeriesStyle::Points, SCATTER_COLOR),
        ChartKind::Pie => pie(item, dataset),
    }
}

fn cartesian(
    item: &ChartItem,
    dataset: &Dataset,
    style: SeriesStyle,
    color_index: usize,
) -> ChartSpec {
    let rows = dataset.num_rows();
    let config = &item.config;

    let labels = dataset.text_values(&config.x_axis).unwrap_or_else(|| {
        tracing::debug!("'{}': x field '{}' not in dataset", item.name, config.x_axis);
        vec![None; rows]
    });
    let values = dataset.numeric_values(&config.y_axis).unwrap_or_else(|| {
        tracing::debug!("'{}': y field '{}' not in dataset", item.name, config.y_axis);
        vec![None; rows]
    });

    let points = labels
        .into_iter()
        .zip(values)
        .enumerate()
        .map(|(i, (label, y))| CartesianPoint { x: i as f64, label, y })
        .collect();

    ChartSpec::Cartesian {
        style,
        x_field: config.x_axis.clone(),
        y_field: config.y_axis.clone(),
        color_index,
        points,
    }
}

fn pie(item: &ChartItem, dataset: &Dataset) -> ChartSpec {
    let rows = dataset.num_rows();
    let value_field = &item.config.y_axis;

    let labels = dataset.text_values("name").unwrap_or_else(|| vec![None; rows]);
    let values = dataset.numeric_values(value_field).unwrap_or_else(|| {
        tracing::debug!("'{}': value field '{}' not in dataset", item.name, value_field);
        vec![None; rows]
    });

    let slices = labels
        .into_iter()
        .zip(values)
        .enumerate()
        .map(|(i, (label, value))| PieSlice {
            label: label.unwrap_or_default(),
            value,
            color_index: i,
        })
        .collect();

    ChartSpec::Pie {
        value_field: value_field.clone(),
        slices,
    }
}
