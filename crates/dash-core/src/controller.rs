//! Top-level owner of the dashboard and the drag interaction
//!
//! The UI holds one [`DashboardController`] and calls its methods from input
//! callbacks. Observers subscribe to the event bus instead of reading shared
//! state.

use dash_data::FieldType;
use tracing::{debug, info};

use crate::chart::{AxisKind, ChartId, ChartKind};
use crate::drag::{DragState, DraggedField, DropOutcome};
use crate::events::{DashboardEvent, EventBus, EventHandler};
use crate::settings::DashboardSettings;
use crate::snapshot::{DashboardError, DashboardSnapshot};
use crate::state::DashboardState;

/// Owns dashboard state, drag state and the event bus
pub struct DashboardController {
    dashboard: DashboardState,
    drag: DragState,
    event_bus: EventBus,
    settings: DashboardSettings,
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new(DashboardSettings::default())
    }
}

impl DashboardController {
    pub fn new(settings: DashboardSettings) -> Self {
        Self {
            dashboard: DashboardState::new(&settings),
            drag: DragState::new(),
            event_bus: EventBus::new(),
            settings,
        }
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// The field currently being dragged
    pub fn dragged_field(&self) -> Option<&DraggedField> {
        self.drag.current()
    }

    /// Register an observer for dashboard events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    pub fn add_chart(&mut self, kind: ChartKind) -> ChartId {
        let id = self.dashboard.add_chart(kind);
        let name = self
            .dashboard
            .item(&id)
            .map(|item| item.name.clone())
            .unwrap_or_default();

        info!("Added {} '{}'", kind, name);
        self.event_bus.publish(DashboardEvent::ChartAdded {
            id: id.clone(),
            kind,
            name,
        });
        id
    }

    pub fn remove_chart(&mut self, id: &ChartId) {
        if self.dashboard.remove_chart(id) {
            info!("Removed chart {}", id);
            self.event_bus.publish(DashboardEvent::ChartRemoved { id: id.clone() });
        }
    }

    pub fn rename_dashboard(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name == self.dashboard.name() {
            return;
        }
        self.dashboard.rename(name.clone());
        self.event_bus.publish(DashboardEvent::DashboardRenamed { name });
    }

    pub fn update_axis(&mut self, id: &ChartId, axis: AxisKind, field: impl Into<String>) {
        let field = field.into();
        if self.dashboard.update_axis(id, axis, field.clone()) {
            info!("Chart {} {:?} axis -> '{}'", id, axis, field);
            self.event_bus.publish(DashboardEvent::AxisUpdated {
                id: id.clone(),
                axis,
                field,
            });
        }
    }

    /// Pick up a field. A previous drag that was never dropped is discarded.
    pub fn begin_drag(&mut self, field: impl Into<String>, source_type: FieldType) {
        let field = field.into();
        if let Some(abandoned) = self.drag.begin(field.clone(), source_type) {
            debug!("Abandoned drag of '{}'", abandoned.field);
        }
        self.event_bus.publish(DashboardEvent::DragStarted { field, source_type });
    }

    /// Drop the dragged field on a chart. The drag ends even if the chart is gone.
    pub fn drop_on(&mut self, target: &ChartId) -> DropOutcome {
        let outcome = self.drag.drop_on(&mut self.dashboard, target);

        match &outcome {
            DropOutcome::NoDrag => {}
            DropOutcome::Applied { field, axis } => {
                info!("Chart {} {:?} axis -> '{}'", target, axis, field);
                self.event_bus.publish(DashboardEvent::AxisUpdated {
                    id: target.clone(),
                    axis: *axis,
                    field: field.clone(),
                });
                self.event_bus.publish(DashboardEvent::DragCleared);
            }
            DropOutcome::Discarded { .. } => {
                self.event_bus.publish(DashboardEvent::DragCleared);
            }
        }

        outcome
    }

    /// End a drag that was released away from any chart
    pub fn cancel_drag(&mut self) {
        if let Some(dragged) = self.drag.clear() {
            debug!("Drag of '{}' cancelled", dragged.field);
            self.event_bus.publish(DashboardEvent::DragCleared);
        }
    }

    /// Emit the dashboard snapshot to the log for saving
    pub fn save(&self) -> Result<String, DashboardError> {
        let json = DashboardSnapshot::capture(&self.dashboard).to_json()?;
        info!("Saving dashboard... {}", json);
        self.event_bus.publish(DashboardEvent::DashboardSaved {
            item_count: self.dashboard.len(),
        });
        Ok(json)
    }

    /// Emit the dashboard snapshot to the log for export
    pub fn export(&self) -> Result<String, DashboardError> {
        let json = DashboardSnapshot::capture(&self.dashboard).to_json()?;
        info!("Exporting dashboard... {}", json);
        self.event_bus.publish(DashboardEvent::DashboardExported {
            item_count: self.dashboard.len(),
        });
        Ok(json)
    }
}
