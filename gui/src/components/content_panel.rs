use egui::{ComboBox, ScrollArea, TextEdit, TextStyle, TopBottomPanel, Ui};
use egui_extras::{Column, TableBuilder};
use relay_api::{
    domain::{
        form::{append_row, remove_row, update_row},
        ui::RequestWindowMode,
    },
    AuthMode, RowField, RowGroup,
};

use crate::Gui;

pub fn content_panel(gui: &mut Gui, ctx: &egui::Context) {
    TopBottomPanel::top("request_panel")
        .resizable(true)
        .min_height(220.0)
        .show(ctx, |ui| match gui.request_window_mode {
            RequestWindowMode::PARAMS => {
                rows_table(gui, ui, RowGroup::PARAMS, "Query Parameters", "Add Parameter")
            }
            RequestWindowMode::HEADERS => {
                rows_table(gui, ui, RowGroup::HEADERS, "Headers", "Add Header")
            }
            RequestWindowMode::AUTHORIZATION => auth_tab(gui, ui),
            RequestWindowMode::BODY => body_tab(gui, ui),
        });
}

fn empty_rows_message(group: RowGroup, add_label: &str) -> String {
    let noun = match group {
        RowGroup::PARAMS => "parameters",
        RowGroup::HEADERS => "headers",
    };
    format!("No {} added yet. Click \"{}\" to get started.", noun, add_label)
}

fn rows_table(gui: &mut Gui, ui: &mut Ui, group: RowGroup, title: &str, add_label: &str) {
    ui.horizontal(|ui| {
        ui.strong(title);
        if ui.button(add_label).clicked() {
            let rows = append_row(gui.form.rows(group));
            gui.form.set_rows(group, rows);
        }
    });

    let rows = gui.form.rows(group).to_vec();
    if rows.is_empty() {
        ui.weak(empty_rows_message(group, add_label));
        return;
    }

    let mut edited: Option<(usize, RowField)> = None;
    let mut removed: Option<usize> = None;
    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto())
        .column(Column::initial(220.0))
        .column(Column::initial(320.0))
        .column(Column::auto());
    table
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Enabled");
            });
            header.col(|ui| {
                ui.strong("Key");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
            header.col(|_ui| {});
        })
        .body(|mut body| {
            for (index, row) in rows.iter().enumerate() {
                body.row(30.0, |mut table_row| {
                    table_row.col(|ui| {
                        let mut enabled = row.enabled;
                        if ui.checkbox(&mut enabled, "").changed() {
                            edited = Some((index, RowField::Enabled(enabled)));
                        }
                    });
                    table_row.col(|ui| {
                        let mut key = row.key.clone();
                        if ui
                            .add(TextEdit::singleline(&mut key).hint_text("Key"))
                            .changed()
                        {
                            edited = Some((index, RowField::Key(key)));
                        }
                    });
                    table_row.col(|ui| {
                        let mut value = row.value.clone();
                        if ui
                            .add(TextEdit::singleline(&mut value).hint_text("Value"))
                            .changed()
                        {
                            edited = Some((index, RowField::Value(value)));
                        }
                    });
                    table_row.col(|ui| {
                        if ui.button("Remove").clicked() {
                            removed = Some(index);
                        }
                    });
                });
            }
        });

    if let Some(index) = removed {
        gui.form.set_rows(group, remove_row(&rows, index));
    } else if let Some((index, field)) = edited {
        gui.form.set_rows(group, update_row(&rows, index, field));
    }
}

fn auth_tab(gui: &mut Gui, ui: &mut Ui) {
    let mut auth = gui.form.auth().clone();
    ComboBox::from_label("Authentication Type")
        .selected_text(auth.r#type.label())
        .show_ui(ui, |ui| {
            for mode in [AuthMode::NONE, AuthMode::BEARER, AuthMode::BASIC] {
                ui.selectable_value(&mut auth.r#type, mode, mode.label());
            }
        });
    ui.add_space(8.0);
    match auth.r#type {
        AuthMode::BEARER => {
            ui.label("Token");
            ui.add(
                TextEdit::singleline(&mut auth.token)
                    .password(true)
                    .hint_text("Enter your bearer token"),
            );
        }
        AuthMode::BASIC => {
            ui.label("Username");
            ui.add(TextEdit::singleline(&mut auth.username).hint_text("Enter username"));
            ui.label("Password");
            ui.add(
                TextEdit::singleline(&mut auth.password)
                    .password(true)
                    .hint_text("Enter password"),
            );
        }
        AuthMode::NONE => {
            ui.weak("No authentication required for this request.");
        }
    }
    if &auth != gui.form.auth() {
        gui.form.set_auth(auth);
    }
}

fn body_tab(gui: &mut Gui, ui: &mut Ui) {
    let method = gui.form.method();
    if !method.allows_body() {
        ui.weak(format!(
            "Request body is not available for {} requests.",
            method
        ));
        return;
    }
    ui.label("Request Body (JSON)");
    let mut body_str = gui.form.body().to_string();
    ScrollArea::vertical().show(ui, |ui| {
        let editor = TextEdit::multiline(&mut body_str)
            .code_editor()
            .desired_rows(10)
            .lock_focus(true)
            .desired_width(f32::INFINITY)
            .hint_text("{\"key\": \"value\"}")
            .font(TextStyle::Monospace);
        if ui.add(editor).changed() {
            gui.form.set_body(body_str.clone());
        }
    });
    ui.small(
        "Enter valid JSON data for the request body. \
         The Content-Type will automatically be set to application/json.",
    );
}
