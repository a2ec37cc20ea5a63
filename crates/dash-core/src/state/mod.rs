use tracing::debug;

use crate::chart::{AxisConfig, AxisKind, ChartId, ChartItem, ChartKind};
use crate::settings::DashboardSettings;

/// The ordered set of charts on the dashboard plus its display name.
///
/// Every mutation goes through the methods here. Operations on an id that is
/// not present leave the state untouched and report `false`.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Display name
    name: String,

    /// Charts in creation order
    items: Vec<ChartItem>,

    /// Sequence number for the next generated id
    next_seq: u64,

    /// Config copied into every new chart
    default_config: AxisConfig,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(&DashboardSettings::default())
    }
}

impl DashboardState {
    /// Create an empty dashboard
    pub fn new(settings: &DashboardSettings) -> Self {
        Self {
            name: settings.dashboard_name.clone(),
            items: Vec::new(),
            next_seq: 0,
            default_config: settings.default_axis.clone(),
        }
    }

    /// Append a new chart of the given kind and return its id.
    ///
    /// The name uses the current item count, so removing and re-adding
    /// charts can produce a name that is already on the board.
    pub fn add_chart(&mut self, kind: ChartKind) -> ChartId {
        self.next_seq += 1;
        let id = ChartId::generate(self.next_seq);

        let item = ChartItem {
            id: id.clone(),
            kind,
            name: format!("{} {}", kind.label(), self.items.len() + 1),
            config: self.default_config.clone(),
        };

        debug!("Adding chart '{}' ({})", item.name, id);
        self.items.push(item);
        id
    }

    /// Remove the chart with the given id
    pub fn remove_chart(&mut self, id: &ChartId) -> bool {
        match self.items.iter().position(|item| &item.id == id) {
            Some(index) => {
                let removed = self.items.remove(index);
                debug!("Removed chart '{}' ({})", removed.name, id);
                true
            }
            None => {
                debug!("Remove ignored, no chart with id {}", id);
                false
            }
        }
    }

    /// Replace the display name. Any string is accepted.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Bind a field to one axis of a chart.
    ///
    /// The field is not checked against the catalog; an unknown name renders
    /// as an empty axis.
    pub fn update_axis(&mut self, id: &ChartId, axis: AxisKind, field: impl Into<String>) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            debug!("Axis update ignored, no chart with id {}", id);
            return false;
        };

        let field = field.into();
        let mut config = item.config.clone();
        match axis {
            AxisKind::X => config.x_axis = field,
            AxisKind::Y => config.y_axis = field,
        }
        item.config = config;
        true
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[ChartItem] {
        &self.items
    }

    /// Look up a chart by id
    pub fn item(&self, id: &ChartId) -> Option<&ChartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: &DashboardState) -> Vec<ChartId> {
        state.items().iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_add_appends_in_call_order() {
        let mut state = DashboardState::default();
        let kinds = [
            ChartKind::Pie,
            ChartKind::Bar,
            ChartKind::Scatter,
            ChartKind::Line,
            ChartKind::Bar,
        ];

        let created: Vec<ChartId> = kinds.iter().map(|kind| state.add_chart(*kind)).collect();

        assert_eq!(ids(&state), created);
        let stored_kinds: Vec<ChartKind> = state.items().iter().map(|item| item.kind).collect();
        assert_eq!(stored_kinds, kinds);

        let mut unique = created.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), created.len());
    }

    #[test]
    fn test_add_names_and_defaults() {
        let mut state = DashboardState::default();
        state.add_chart(ChartKind::Bar);
        state.add_chart(ChartKind::Scatter);

        assert_eq!(state.items()[0].name, "Bar Chart 1");
        assert_eq!(state.items()[1].name, "Scatter Plot 2");
        assert_eq!(state.items()[1].config, AxisConfig::default());
    }

    #[test]
    fn test_names_repeat_after_remove() {
        let mut state = DashboardState::default();
        let first = state.add_chart(ChartKind::Line);
        let second = state.add_chart(ChartKind::Line);
        state.remove_chart(&first);
        let third = state.add_chart(ChartKind::Line);

        let names: Vec<&str> = state.items().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Line Chart 2", "Line Chart 2"]);

        // Ids of removed charts are never handed out again
        assert_ne!(third, first);
        assert_ne!(third, second);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut state = DashboardState::default();
        let a = state.add_chart(ChartKind::Bar);
        let b = state.add_chart(ChartKind::Line);
        let c = state.add_chart(ChartKind::Pie);

        assert!(state.remove_chart(&b));
        assert_eq!(ids(&state), vec![a, c]);
        assert_eq!(state.items()[1].name, "Pie Chart 3");
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut state = DashboardState::default();
        state.add_chart(ChartKind::Bar);
        state.add_chart(ChartKind::Pie);
        let before = state.items().to_vec();

        let missing = ChartId::from("chart-missing");
        assert!(!state.remove_chart(&missing));
        assert!(!state.update_axis(&missing, AxisKind::X, "region"));

        assert_eq!(state.items(), before.as_slice());
    }

    #[test]
    fn test_update_axis_touches_one_axis() {
        let mut state = DashboardState::default();
        let id = state.add_chart(ChartKind::Bar);

        assert!(state.update_axis(&id, AxisKind::Y, "profit"));
        let config = &state.item(&id).unwrap().config;
        assert_eq!(config.x_axis, "name");
        assert_eq!(config.y_axis, "profit");

        // Not validated against the catalog
        assert!(state.update_axis(&id, AxisKind::X, "no_such_field"));
        assert_eq!(state.item(&id).unwrap().config.x_axis, "no_such_field");
    }

    #[test]
    fn test_rename_accepts_empty() {
        let mut state = DashboardState::default();
        assert_eq!(state.name(), "My Dashboard");
        state.rename("");
        assert_eq!(state.name(), "");
    }
}
