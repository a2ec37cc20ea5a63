//! Toolbar: dashboard name, save/export and the add-chart buttons

use egui::{Align, Layout, RichText, TextEdit, TextStyle, Ui};

use dash_core::ChartKind;

use crate::{icons, ShellAction};

/// Draw the toolbar rows
pub fn toolbar(ui: &mut Ui, dashboard_name: &str, actions: &mut Vec<ShellAction>) {
    ui.horizontal(|ui| {
        let mut name = dashboard_name.to_string();
        let response = ui.add(
            TextEdit::singleline(&mut name)
                .font(TextStyle::Heading)
                .desired_width(320.0),
        );
        if response.changed() {
            actions.push(ShellAction::Rename(name));
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button(format!("{} Export", icons::EXPORT)).clicked() {
                actions.push(ShellAction::Export);
            }
            if ui.button(format!("{} Save", icons::SAVE)).clicked() {
                actions.push(ShellAction::Save);
            }
        });
    });

    ui.add_space(6.0);

    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            for kind in ChartKind::ALL {
                let label = RichText::new(format!("{} {}", icons::chart_kind(kind), kind.label()));
                let hint = format!("Add a {}", kind.label().to_lowercase());
                if ui.button(label).on_hover_text(hint).clicked() {
                    actions.push(ShellAction::AddChart(kind));
                }
            }
        });
    });
}
