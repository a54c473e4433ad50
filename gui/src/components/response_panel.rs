use egui::{Align, CentralPanel, Color32, Grid, Layout, RichText, ScrollArea, TextEdit};
use egui_json_tree::JsonTree;
use relay_api::domain::ui::ResponseWindowMode;

use crate::Gui;

pub fn response_panel(gui: &mut Gui, ctx: &egui::Context) {
    CentralPanel::default().show(ctx, |ui| {
        let Some(response) = gui.response.as_ref() else {
            ui.weak("Send a request to see the response here.");
            return;
        };

        ui.horizontal(|ui| {
            ui.heading("Response");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let [r, g, b] = response.band().color();
                ui.label(
                    RichText::new(format!("{} {}", response.status, response.status_text))
                        .strong()
                        .color(Color32::WHITE)
                        .background_color(Color32::from_rgb(r, g, b)),
                );
                ui.label(format!("{}ms", response.response_time_ms));
            });
        });
        ui.weak(&response.url);

        ui.horizontal(|ui| {
            let mode = &mut gui.response_window_mode;
            ui.selectable_value(mode, ResponseWindowMode::BODY, "Response Body");
            ui.selectable_value(mode, ResponseWindowMode::TREE, "Tree");
            ui.selectable_value(mode, ResponseWindowMode::HEADERS, "Headers");
        });
        ui.separator();

        match gui.response_window_mode {
            ResponseWindowMode::BODY => {
                let rendered = response.data.render();
                ScrollArea::vertical().show(ui, |ui| {
                    ui.add(
                        TextEdit::multiline(&mut rendered.as_str())
                            .code_editor()
                            .desired_width(f32::INFINITY),
                    );
                });
            }
            ResponseWindowMode::TREE => match response.data.as_json() {
                Some(json) => {
                    ScrollArea::vertical().show(ui, |ui| {
                        JsonTree::new("response-json", json).show(ui);
                    });
                }
                None => {
                    ui.weak("Tree view is only available for JSON responses.");
                }
            },
            ResponseWindowMode::HEADERS => {
                ScrollArea::vertical().show(ui, |ui| {
                    Grid::new("response_headers_grid")
                        .striped(true)
                        .num_columns(2)
                        .min_col_width(160.0)
                        .show(ui, |ui| {
                            ui.strong("Key");
                            ui.strong("Value");
                            ui.end_row();
                            for header in &response.headers {
                                ui.monospace(&header.key);
                                ui.label(&header.value);
                                ui.end_row();
                            }
                        });
                });
            }
        }
    });
}
