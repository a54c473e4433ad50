use std::time::{Duration, Instant};

use egui::{Align2, Area, Color32, Frame, Id};
use relay_api::domain::ui::NotificationKind;

const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    created_at: Instant,
}

/// Transient messages drawn in the top right corner.
#[derive(Debug, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::SUCCESS, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::ERROR, message.into());
    }

    fn push(&mut self, kind: NotificationKind, message: String) {
        self.items.push(Notification {
            kind,
            message,
            created_at: Instant::now(),
        });
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn prune(&mut self, now: Instant) {
        self.items
            .retain(|n| now.duration_since(n.created_at) < NOTIFICATION_TTL);
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune(Instant::now());
        if self.items.is_empty() {
            return;
        }
        Area::new(Id::new("notifications"))
            .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
            .show(ctx, |ui| {
                for notification in &self.items {
                    let color = match notification.kind {
                        NotificationKind::SUCCESS => Color32::from_rgb(22, 163, 74),
                        NotificationKind::ERROR => Color32::from_rgb(220, 38, 38),
                    };
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.colored_label(color, &notification.message);
                    });
                }
            });
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
