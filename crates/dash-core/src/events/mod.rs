use parking_lot::Mutex;

use crate::chart::{AxisKind, ChartId, ChartKind};
use dash_data::FieldType;

/// Dashboard-wide event bus
pub struct EventBus {
    handlers: Mutex<Vec<Box<dyn EventHandler>>>,
}

/// Handler trait for event handlers
pub trait EventHandler: Send {
    fn handle(&mut self, event: &DashboardEvent);
}

/// Something observable happened to the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// A chart was appended
    ChartAdded {
        id: ChartId,
        kind: ChartKind,
        name: String,
    },

    /// A chart was removed
    ChartRemoved { id: ChartId },

    /// A field was bound to an axis
    AxisUpdated {
        id: ChartId,
        axis: AxisKind,
        field: String,
    },

    /// The dashboard display name changed
    DashboardRenamed { name: String },

    /// A field was picked up from the catalog
    DragStarted { field: String, source_type: FieldType },

    /// The pending drag was cleared, by a drop or a cancel
    DragCleared,

    /// The dashboard snapshot was emitted for saving
    DashboardSaved { item_count: usize },

    /// The dashboard snapshot was emitted for export
    DashboardExported { item_count: usize },
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe to all dashboard events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.lock().push(handler);
    }

    /// Publish an event to every handler, in subscription order
    pub fn publish(&self, event: DashboardEvent) {
        let mut handlers = self.handlers.lock();
        for handler in handlers.iter_mut() {
            handler.handle(&event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&DashboardEvent) + Send,
{
    fn handle(&mut self, event: &DashboardEvent) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&DashboardEvent) + Send + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_publish_reaches_all_handlers() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = seen.clone();
            bus.subscribe(handler_from_fn(move |event| {
                seen.lock().push((tag, event.clone()));
            }));
        }

        bus.publish(DashboardEvent::DragCleared);

        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "first");
        assert_eq!(seen[1], ("second", DashboardEvent::DragCleared));
    }
}
