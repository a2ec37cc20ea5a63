//! User interface components for the dashboard builder
//!
//! This crate provides the egui shell: the field sidebar, the toolbar and the
//! grid of chart cards. Panels never mutate the dashboard directly; they
//! return [`ShellAction`]s which the shell applies to the controller.

pub mod chart_grid;
pub mod field_panel;
pub mod shell;
pub mod theme;
pub mod toolbar;
pub mod widget_utils;

use dash_core::{ChartId, ChartKind};
use dash_data::FieldType;

/// Re-export commonly used types
pub use shell::{AppShell, ShellConfig};
pub use theme::{Theme, apply_theme};
pub use widget_utils::WidgetId;

/// A user intent collected while drawing a frame
#[derive(Debug, Clone, PartialEq)]
pub enum ShellAction {
    AddChart(ChartKind),
    RemoveChart(ChartId),
    Rename(String),
    BeginDrag { field: String, field_type: FieldType },
    Drop(ChartId),
    CancelDrag,
    Save,
    Export,
}

// Common icon definitions
pub mod icons {
    use dash_core::ChartKind;
    use dash_data::FieldType;

    pub const SAVE: &str = "💾";
    pub const EXPORT: &str = "⬇";
    pub const TRASH: &str = "🗑";
    pub const DIMENSION: &str = "📊";
    pub const MEASURE: &str = "🔢";

    /// Toolbar glyph for a chart kind
    pub fn chart_kind(kind: ChartKind) -> &'static str {
        match kind {
            ChartKind::Bar => "📊",
            ChartKind::Line => "📈",
            ChartKind::Pie => "◔",
            ChartKind::Scatter => "⚡",
        }
    }

    /// Sidebar glyph for a field type
    pub fn field_type(field_type: FieldType) -> &'static str {
        match field_type {
            FieldType::Dimension => DIMENSION,
            FieldType::Measure => MEASURE,
        }
    }
}

// Panel IDs
pub mod panel_ids {
    pub const FIELDS: &str = "field_panel";
    pub const TOOLBAR: &str = "toolbar";
    pub const DRAG_PREVIEW: &str = "field_drag_preview";
}
