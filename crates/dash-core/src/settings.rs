//! Dashboard settings

use serde::{Deserialize, Serialize};

use crate::chart::AxisConfig;

/// Settings that shape a new dashboard and its layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Name shown in the toolbar before the user edits it
    pub dashboard_name: String,

    /// Axis bindings and size given to every new chart
    pub default_axis: AxisConfig,

    /// Minimum width of a chart card before the grid drops a column
    pub card_min_width: f32,

    /// Maximum number of grid columns
    pub max_columns: usize,

    /// Whether to use dark mode
    pub dark_mode: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            dashboard_name: "My Dashboard".to_string(),
            default_axis: AxisConfig::default(),
            card_min_width: 360.0,
            max_columns: 3,
            dark_mode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: DashboardSettings =
            serde_json::from_str(r#"{ "dashboard_name": "Sales" }"#).unwrap();
        assert_eq!(settings.dashboard_name, "Sales");
        assert_eq!(settings.default_axis, AxisConfig::default());
        assert_eq!(settings.max_columns, 3);
    }
}
