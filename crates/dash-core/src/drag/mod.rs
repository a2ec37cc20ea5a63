//! Drag-and-drop of catalog fields onto charts
//!
//! A drag is two-phase: a field is picked up from the sidebar, then dropped on
//! a chart card. The only thing linking the two phases is [`DragState`].

use dash_data::FieldType;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::{AxisKind, ChartId};
use crate::state::DashboardState;

/// A field currently being dragged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraggedField {
    pub field: String,
    pub source_type: FieldType,
}

/// What happened when a drop was attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was being dragged
    NoDrag,

    /// The field was bound to an axis of the target chart
    Applied { field: String, axis: AxisKind },

    /// The target chart does not exist; the field was dropped anyway
    Discarded { field: String },
}

/// Transient record of the in-progress drag. At most one drag is active.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    current: Option<DraggedField>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging a field, replacing any drag that was never dropped.
    ///
    /// Returns the abandoned drag, if there was one.
    pub fn begin(
        &mut self,
        field: impl Into<String>,
        source_type: FieldType,
    ) -> Option<DraggedField> {
        let dragged = DraggedField {
            field: field.into(),
            source_type,
        };
        debug!("Drag started: {} ({:?})", dragged.field, dragged.source_type);
        self.current.replace(dragged)
    }

    /// The field being dragged
    pub fn current(&self) -> Option<&DraggedField> {
        self.current.as_ref()
    }

    /// End the drag without dropping it anywhere
    pub fn clear(&mut self) -> Option<DraggedField> {
        self.current.take()
    }

    /// Drop the dragged field on a chart.
    ///
    /// Dimensions bind to the x axis and measures to the y axis. The drag is
    /// cleared whether or not `target` names an existing chart.
    pub fn drop_on(&mut self, dashboard: &mut DashboardState, target: &ChartId) -> DropOutcome {
        let Some(dragged) = self.current.take() else {
            return DropOutcome::NoDrag;
        };

        let axis = AxisKind::for_field_type(dragged.source_type);
        if dashboard.update_axis(target, axis, dragged.field.clone()) {
            DropOutcome::Applied {
                field: dragged.field,
                axis,
            }
        } else {
            debug!("Dropped '{}' on missing chart {}, discarding", dragged.field, target);
            DropOutcome::Discarded {
                field: dragged.field,
            }
        }
    }
}
