//! # Notifications Widget
//!
//! Toast notification system using egui-notify for wallet and transfer confirmations.

use std::time::Duration;

use egui_notify::Toasts;

use crate::app::{Notification, NotificationLevel};

/// Confirmation toasts stay up long enough to read a multi-line summary.
const TOAST_DURATION: Duration = Duration::from_secs(6);

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification produced by the handlers
    pub fn push(&mut self, notification: Notification) {
        let Notification { level, message } = notification;
        let toast = match level {
            NotificationLevel::Success => self.toasts.success(message),
            NotificationLevel::Warning => self.toasts.warning(message),
        };
        toast.duration(Some(TOAST_DURATION));
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
