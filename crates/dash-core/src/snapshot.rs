//! Serializable view of the whole dashboard, emitted on save and export

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::ChartItem;
use crate::state::DashboardState;

/// Errors produced by dashboard-level operations
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to serialize dashboard: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Name and charts of a dashboard at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub dashboard_name: String,
    pub dashboard_items: Vec<ChartItem>,
}

impl DashboardSnapshot {
    /// Capture the current dashboard
    pub fn capture(state: &DashboardState) -> Self {
        Self {
            dashboard_name: state.name().to_string(),
            dashboard_items: state.items().to_vec(),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, DashboardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
