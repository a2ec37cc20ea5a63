//! Chart model types

use std::fmt;

use dash_data::FieldType;
use serde::{Deserialize, Serialize};

/// The four supported visualization types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
}

impl ChartKind {
    /// All kinds, in toolbar order
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Scatter,
    ];

    /// Human readable label, also the prefix of generated chart names
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Scatter => "Scatter Plot",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unique identifier of a chart on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartId(String);

impl ChartId {
    /// Create an id from a wall-clock timestamp and a per-dashboard sequence number.
    ///
    /// The sequence number alone keeps ids unique within one dashboard; the
    /// timestamp keeps them distinct across sessions.
    pub fn generate(seq: u64) -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("chart-{}-{}", millis, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChartId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ChartId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which axis a field binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    /// Categorical axis
    X,
    /// Value axis
    Y,
}

impl AxisKind {
    /// Dimensions go on the categorical axis, measures on the value axis.
    pub fn for_field_type(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Dimension => AxisKind::X,
            FieldType::Measure => AxisKind::Y,
        }
    }
}

/// Field bindings and render size of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    /// Field driving the categorical axis
    pub x_axis: String,

    /// Field driving the value axis
    pub y_axis: String,

    pub width: u32,
    pub height: u32,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            x_axis: "name".to_string(),
            y_axis: "sales".to_string(),
            width: 400,
            height: 300,
        }
    }
}

/// A chart placed on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartItem {
    pub id: ChartId,

    #[serde(rename = "type")]
    pub kind: ChartKind,

    pub name: String,
    pub config: AxisConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_for_field_type() {
        assert_eq!(AxisKind::for_field_type(FieldType::Dimension), AxisKind::X);
        assert_eq!(AxisKind::for_field_type(FieldType::Measure), AxisKind::Y);
    }

    #[test]
    fn test_default_axis_config() {
        let config = AxisConfig::default();
        assert_eq!(config.x_axis, "name");
        assert_eq!(config.y_axis, "sales");
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 300);
    }

    #[test]
    fn test_generated_ids_differ_by_sequence() {
        let a = ChartId::generate(1);
        let b = ChartId::generate(2);
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("chart-"));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ChartKind::Bar.label(), "Bar Chart");
        assert_eq!(ChartKind::Scatter.label(), "Scatter Plot");
        assert_eq!(serde_json::to_string(&ChartKind::Pie).unwrap(), "\"pie\"");
    }
}
