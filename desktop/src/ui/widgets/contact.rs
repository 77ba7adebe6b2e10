//! # Contact Us Dialog

use egui::RichText;

use crate::app::App;
use crate::ui::theme::Theme;

const CONTACT_LINES: [&str; 4] = [
    "Email: support@zlytic.ZirraPay.com",
    "WhatsApp: +234 800 ZirraPay",
    "Telegram: @ZirraPaySupport",
    "Website: www.zlytic.ZirraPay.com",
];

/// Render the support dialog while it is open
pub fn render_contact_dialog(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    let mut open = true;

    egui::Window::new("Contact ZirraPay Support")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(RichText::new("24/7 Live Support").strong().color(theme.selected));
            ui.add_space(4.0);
            for line in CONTACT_LINES {
                ui.label(line);
            }
            ui.add_space(8.0);
            ui.label(RichText::new("Average response time: < 2 minutes").color(theme.dim));
            ui.label(RichText::new("Languages: English, Yoruba, Hausa, Igbo").color(theme.dim));
        });

    if !open {
        app.handle_contact_toggle(false);
    }
}
