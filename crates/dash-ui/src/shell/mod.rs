use egui::{
    Align2, CentralPanel, Context, CursorIcon, FontId, Id, LayerId, Order, ScrollArea, SidePanel,
    TopBottomPanel,
};
use tracing::error;

use dash_core::{DashboardController, DashboardSettings, DraggedField};
use dash_data::{display_label, Dataset, FieldCatalog};

use crate::{chart_grid, field_panel, icons, panel_ids, toolbar, ShellAction};

/// Shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub sidebar_width: f32,
    pub card_min_width: f32,
    pub max_columns: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::from_settings(&DashboardSettings::default())
    }
}

impl ShellConfig {
    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self {
            sidebar_width: 220.0,
            card_min_width: settings.card_min_width,
            max_columns: settings.max_columns,
        }
    }
}

/// Application shell that lays out the sidebar, toolbar and chart grid
pub struct AppShell {
    config: ShellConfig,
    catalog: FieldCatalog,
}

impl AppShell {
    /// Create a new app shell
    pub fn new(config: ShellConfig, catalog: FieldCatalog) -> Self {
        Self { config, catalog }
    }

    /// Draw one frame and apply whatever the user did in it
    pub fn show(&self, ctx: &Context, controller: &mut DashboardController, dataset: &Dataset) {
        let mut actions = Vec::new();
        let dragging = controller.dragged_field().cloned();

        SidePanel::left(panel_ids::FIELDS)
            .exact_width(self.config.sidebar_width)
            .resizable(false)
            .show(ctx, |ui| {
                field_panel::field_panel(
                    ui,
                    &self.catalog,
                    dragging.as_ref().map(|d| d.field.as_str()),
                    &mut actions,
                );
            });

        TopBottomPanel::top(panel_ids::TOOLBAR).show(ctx, |ui| {
            ui.add_space(6.0);
            toolbar::toolbar(ui, controller.dashboard().name(), &mut actions);
            ui.add_space(6.0);
        });

        CentralPanel::default().show(ctx, |ui| {
            let columns = chart_grid::column_count(
                ui.available_width(),
                self.config.card_min_width,
                self.config.max_columns,
            );
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                chart_grid::chart_grid(
                    ui,
                    controller.dashboard().items(),
                    dataset,
                    dragging.is_some(),
                    columns,
                    &mut actions,
                );
            });
        });

        if let Some(dragged) = &dragging {
            drag_preview(ctx, dragged);

            // Released over no card: the drag simply ends
            let released = ctx.input(|i| i.pointer.any_released());
            let dropped = actions.iter().any(|a| matches!(a, ShellAction::Drop(_)));
            if released && !dropped {
                actions.push(ShellAction::CancelDrag);
            }
        }

        apply_actions(controller, actions);
    }
}

/// Label following the pointer while a field is dragged
fn drag_preview(ctx: &Context, dragged: &DraggedField) {
    ctx.set_cursor_icon(CursorIcon::Grabbing);

    if let Some(pos) = ctx.pointer_interact_pos() {
        let layer = LayerId::new(Order::Tooltip, Id::new(panel_ids::DRAG_PREVIEW));
        let painter = ctx.layer_painter(layer);
        painter.text(
            pos + egui::vec2(12.0, 0.0),
            Align2::LEFT_CENTER,
            format!("{} {}", icons::field_type(dragged.source_type), display_label(&dragged.field)),
            FontId::proportional(13.0),
            ctx.style().visuals.strong_text_color(),
        );
    }
}

/// Apply collected actions in the order they were produced
pub fn apply_actions(controller: &mut DashboardController, actions: Vec<ShellAction>) {
    for action in actions {
        match action {
            ShellAction::AddChart(kind) => {
                controller.add_chart(kind);
            }
            ShellAction::RemoveChart(id) => controller.remove_chart(&id),
            ShellAction::Rename(name) => controller.rename_dashboard(name),
            ShellAction::BeginDrag { field, field_type } => {
                controller.begin_drag(field, field_type)
            }
            ShellAction::Drop(id) => {
                controller.drop_on(&id);
            }
            ShellAction::CancelDrag => controller.cancel_drag(),
            ShellAction::Save => {
                if let Err(e) = controller.save() {
                    error!("Failed to save dashboard: {}", e);
                }
            }
            ShellAction::Export => {
                if let Err(e) = controller.export() {
                    error!("Failed to export dashboard: {}", e);
                }
            }
        }
    }
}
