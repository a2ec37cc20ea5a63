//! Core state for the dashboard builder
//!
//! This crate owns the dashboard model, the field drag-and-drop interaction
//! and the controller the UI drives them through.

pub mod chart;
pub mod controller;
pub mod drag;
pub mod events;
pub mod settings;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use chart::{AxisConfig, AxisKind, ChartId, ChartItem, ChartKind};
pub use controller::DashboardController;
pub use drag::{DragState, DraggedField, DropOutcome};
pub use events::{handler_from_fn, DashboardEvent, EventBus, EventHandler};
pub use settings::DashboardSettings;
pub use snapshot::{DashboardError, DashboardSnapshot};
pub use state::DashboardState;
