mod components;
mod events;
mod notifications;

use std::env;

use components::{
    content_header_panel::content_header_panel, content_panel::content_panel,
    response_panel::response_panel,
};
use eframe::{App, NativeOptions};
use events::GuiEvent;
use log::{error, info, warn};
use notifications::Notifications;
use relay_api::{
    build_request,
    domain::ui::{RequestWindowMode, ResponseWindowMode},
    AssembledRequest, RelayApi, RelayConfig, RequestForm, ResponseDescriptor,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing_subscriber::EnvFilter;

pub struct Gui {
    pub api: RelayApi,
    pub form: RequestForm,
    pub response: Option<ResponseDescriptor>,
    pub request_window_mode: RequestWindowMode,
    pub response_window_mode: ResponseWindowMode,
    pub notifications: Notifications,
    event_tx: UnboundedSender<GuiEvent>,
    event_rx: UnboundedReceiver<GuiEvent>,
}

impl Gui {
    fn new(api: RelayApi, config: &RelayConfig) -> Self {
        let (event_tx, event_rx) = unbounded_channel();
        Self {
            api,
            form: RequestForm::new(config.default_method, config.default_url.clone()),
            response: None,
            request_window_mode: RequestWindowMode::default(),
            response_window_mode: ResponseWindowMode::default(),
            notifications: Notifications::default(),
            event_tx,
            event_rx,
        }
    }

    /// Validates the form and marks it busy. `None` means nothing should be sent.
    fn begin_send(&mut self) -> Option<AssembledRequest> {
        if self.form.is_busy() {
            return None;
        }
        match build_request(&self.form.draft()) {
            Ok(request) => {
                self.form.set_busy(true);
                Some(request)
            }
            Err(err) => {
                warn!("request not sent: {}", err);
                self.notifications.error(err.to_string());
                None
            }
        }
    }

    pub fn spawn_submit(&mut self, ctx: &egui::Context) {
        let Some(request) = self.begin_send() else {
            return;
        };
        let api = self.api.clone();
        let sender = self.event_tx.clone();
        let ctx = ctx.clone();
        tokio::spawn(async move {
            let event = match api.send(request).await {
                Ok(res) => GuiEvent::RequestCompleted(res),
                Err(err) => GuiEvent::RequestFailed(err.to_string()),
            };
            if sender.send(event).is_err() {
                warn!("window closed before the response arrived");
            }
            ctx.request_repaint();
        });
    }

    fn handle_event(&mut self, event: GuiEvent) {
        self.form.set_busy(false);
        match event {
            GuiEvent::RequestCompleted(response) => {
                self.notifications.success(format!(
                    "Request completed in {}ms",
                    response.response_time_ms
                ));
                self.response = Some(response);
            }
            // The previous response stays on screen.
            GuiEvent::RequestFailed(message) => {
                self.notifications.error(message);
            }
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }
}

impl App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        content_header_panel(self, ctx);
        content_panel(self, ctx);
        response_panel(self, ctx);
        self.notifications.show(ctx);
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    let config_path = env::var("RELAY_CONFIG").unwrap_or_else(|_| String::from("relay.json"));
    let loaded = RelayConfig::load_optional(&config_path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => RelayConfig::default(),
    };
    init_logging(&config.log_filter);
    match loaded {
        Ok(Some(_)) => info!("loaded config from {}", config_path),
        Ok(None) => info!("no config at {}, using defaults", config_path),
        Err(err) => warn!("{:#}, using defaults", err),
    }

    let api = match RelayApi::new(&config) {
        Ok(api) => api,
        Err(err) => {
            error!("could not build http client: {}", err);
            return;
        }
    };
    let app = Gui::new(api, &config);
    let native_options = NativeOptions::default();
    if let Err(err) = eframe::run_native("Relay", native_options, Box::new(|_cc| Box::new(app))) {
        error!("{}", err);
    }
}
