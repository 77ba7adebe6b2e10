//! # GUI Rendering Framework
//!
//! Lays out the page every frame from an [`crate::app::ExchangeView`] snapshot: header strip
//! on top, the exchange screen in the central panel, and the contact dialog when open.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::App;
use theme::Theme;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Lock released once the snapshot is taken; rendering happens without holding it
    let view = app.view();
    let theme = Theme::default();

    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::new()
                .fill(theme.card)
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            widgets::header::render_header(ui, &view, app, &theme);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(12.0);
            screens::exchange::render(ui, &view, app);
        });
    });

    if view.contact_open {
        widgets::contact::render_contact_dialog(ctx, app, &theme);
    }
}
