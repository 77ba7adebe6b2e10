//! # Header Strip
//!
//! Brand, trust badges, Contact Us and the wallet button.

use egui::{FontId, RichText};

use crate::app::{App, ExchangeView};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

const TRUST_BADGES: [&str; 3] = ["SSL Secured", "CBN Registered", "KYC Verified"];

/// Render the header strip
pub fn render_header(ui: &mut egui::Ui, view: &ExchangeView, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("ZirraPay")
                .font(FontId::proportional(24.0))
                .strong()
                .color(theme.selected),
        );
        ui.add_space(16.0);

        for badge in TRUST_BADGES {
            render_badge(ui, badge, theme);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let connecting = view.form.is_wallet_connecting();
            let fill = if view.form.is_wallet_connected() {
                theme.colors.surface_raised
            } else {
                theme.colors.accent
            };
            if forms::render_button(ui, &view.wallet_label, Some(fill), None, !connecting).clicked() {
                app.handle_wallet_click();
            }
            if connecting {
                ui.spinner();
            }

            if forms::render_button(ui, "Contact Us", None, None, true).clicked() {
                app.handle_contact_toggle(true);
            }
        });
    });
}

fn render_badge(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, theme.success))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(format!("✔ {}", text)).small().color(theme.success));
        });
}
