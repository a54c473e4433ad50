use egui::{Button, ComboBox, TextEdit, TopBottomPanel};
use relay_api::{domain::ui::RequestWindowMode, HttpMethod};

use crate::Gui;

pub fn content_header_panel(gui: &mut Gui, ctx: &egui::Context) {
    TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.heading("Relay");
        ui.horizontal(|ui| {
            let mut selected_http_method = gui.form.method();
            ComboBox::from_id_source("http_method")
                .selected_text(selected_http_method.to_string())
                .show_ui(ui, |ui| {
                    for method in HttpMethod::ALL {
                        ui.selectable_value(&mut selected_http_method, method, method.to_string());
                    }
                });
            if selected_http_method != gui.form.method() {
                gui.form.set_method(selected_http_method);
            }

            ui.label("URL:");
            let mut url = gui.form.url().to_string();
            let url_edit = TextEdit::singleline(&mut url)
                .hint_text("https://api.example.com/endpoint")
                .desired_width(ui.available_width() - 90.0);
            if ui.add(url_edit).changed() {
                gui.form.set_url(url);
            }

            // Disabled while a send is in flight so two responses never race for the slot.
            let busy = gui.form.is_busy();
            let label = if busy { "Sending..." } else { "Send" };
            if ui.add_enabled(!busy, Button::new(label)).clicked() {
                gui.spawn_submit(ctx);
            }
        });
        ui.horizontal(|ui| {
            let mode = &mut gui.request_window_mode;
            ui.selectable_value(mode, RequestWindowMode::PARAMS, "Params");
            ui.selectable_value(mode, RequestWindowMode::AUTHORIZATION, "Auth");
            ui.selectable_value(mode, RequestWindowMode::HEADERS, "Headers");
            ui.selectable_value(mode, RequestWindowMode::BODY, "Body");
        });
    });
}
