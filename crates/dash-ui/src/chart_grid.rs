//! Grid of chart cards; every card is a drop target for dragged fields

use egui::{Align, Frame, Layout, RichText, Rounding, Stroke, Ui};

use dash_core::ChartItem;
use dash_data::Dataset;

use crate::{icons, theme, ShellAction, WidgetId};

/// Number of card columns that fit in `available_width`
pub fn column_count(available_width: f32, card_min_width: f32, max_columns: usize) -> usize {
    let fitting = (available_width / card_min_width.max(1.0)).floor() as usize;
    fitting.clamp(1, max_columns.max(1))
}

/// Draw all charts, or the empty-state hint when there are none
pub fn chart_grid(
    ui: &mut Ui,
    items: &[ChartItem],
    dataset: &Dataset,
    dragging: bool,
    columns: usize,
    actions: &mut Vec<ShellAction>,
) {
    if items.is_empty() {
        empty_state(ui);
        return;
    }

    let spacing = 16.0;
    let column_width = (ui.available_width() - spacing * (columns as f32 - 1.0)) / columns as f32;

    for row in items.chunks(columns) {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            for item in row {
                ui.vertical(|ui| {
                    ui.set_width(column_width);
                    chart_card(ui, item, dataset, dragging, actions);
                });
            }
        });
        ui.add_space(spacing);
    }
}

fn chart_card(
    ui: &mut Ui,
    item: &ChartItem,
    dataset: &Dataset,
    dragging: bool,
    actions: &mut Vec<ShellAction>,
) {
    let card = ui.push_id(WidgetId::new("chart_card").with(&item.id).id(), |ui| {
        Frame::group(ui.style())
            .inner_margin(12.0)
            .rounding(Rounding::same(6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&item.name).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.small_button(icons::TRASH).on_hover_text("Delete chart").clicked() {
                            actions.push(ShellAction::RemoveChart(item.id.clone()));
                        }
                    });
                });

                ui.add_space(4.0);
                dash_views::show_chart(ui, item, dataset);
                ui.add_space(4.0);

                ui.label(
                    RichText::new(format!("X: {} | Y: {}", item.config.x_axis, item.config.y_axis))
                        .small()
                        .weak(),
                );
            })
            .response
            .rect
    });
    let rect = card.inner;

    // The dragged chip holds the pointer, so plain hover never fires here;
    // test containment directly or drops are never seen.
    if dragging && ui.rect_contains_pointer(rect) {
        ui.painter()
            .rect_stroke(rect, Rounding::same(6.0), Stroke::new(2.0, theme::accent_color()));

        if ui.input(|i| i.pointer.any_released()) {
            actions.push(ShellAction::Drop(item.id.clone()));
        }
    }
}

fn empty_state(ui: &mut Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.heading("Start building your dashboard");
            ui.label(
                RichText::new(
                    "Add charts from the buttons above and drag fields to customize them",
                )
                .weak(),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(300.0, 360.0, 3), 1);
        assert_eq!(column_count(800.0, 360.0, 3), 2);
        assert_eq!(column_count(1500.0, 360.0, 3), 3);
        assert_eq!(column_count(5000.0, 360.0, 3), 3);
    }

    #[test]
    fn test_column_count_degenerate_settings() {
        assert_eq!(column_count(800.0, 0.0, 0), 1);
    }
}
