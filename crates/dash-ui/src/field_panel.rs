//! Sidebar listing the catalog fields as drag sources

use egui::{Align2, CursorIcon, FontId, Rounding, Sense, Stroke, Ui, Vec2};

use dash_data::{display_label, FieldCatalog, FieldType};

use crate::{icons, theme, ShellAction};

const CHIP_HEIGHT: f32 = 28.0;

/// Draw the "Data" sidebar
pub fn field_panel(
    ui: &mut Ui,
    catalog: &FieldCatalog,
    dragging: Option<&str>,
    actions: &mut Vec<ShellAction>,
) {
    ui.heading("Data");
    ui.separator();

    for field_type in [FieldType::Dimension, FieldType::Measure] {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(field_type.section_title()).strong());
        ui.add_space(4.0);

        for field in catalog.fields(field_type) {
            let is_dragged = dragging == Some(field.as_str());
            field_chip(ui, field, field_type, is_dragged, actions);
        }
    }
}

fn field_chip(
    ui: &mut Ui,
    field: &str,
    field_type: FieldType,
    is_dragged: bool,
    actions: &mut Vec<ShellAction>,
) {
    let size = Vec2::new(ui.available_width(), CHIP_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::drag());

    let base = theme::field_color(field_type);
    let fill = if is_dragged || response.hovered() {
        base.linear_multiply(0.6)
    } else {
        base.linear_multiply(0.35)
    };

    let painter = ui.painter();
    painter.rect(rect, Rounding::same(4.0), fill, Stroke::new(1.0, base));
    painter.text(
        rect.left_center() + Vec2::new(8.0, 0.0),
        Align2::LEFT_CENTER,
        format!("{} {}", icons::field_type(field_type), display_label(field)),
        FontId::proportional(13.0),
        ui.visuals().strong_text_color(),
    );

    if response.drag_started() {
        actions.push(ShellAction::BeginDrag {
            field: field.to_string(),
            field_type,
        });
    }

    response.on_hover_cursor(CursorIcon::Grab);
}
