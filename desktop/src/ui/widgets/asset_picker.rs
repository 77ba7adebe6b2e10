//! # Asset Picker Widget
//!
//! Trigger button plus an inline list of the catalog assets. A pointer press anywhere outside
//! the trigger and list closes the list.

use egui::{FontId, RichText, Sense};
use shared::dto::exchange::Asset;

use crate::app::{App, ExchangeView};
use crate::ui::theme::Theme;

const ROW_HEIGHT: f32 = 44.0;

/// Render the asset picker
pub fn render_asset_picker(ui: &mut egui::Ui, view: &ExchangeView, app: &mut App, theme: &Theme) {
    let width = ui.available_width();

    let trigger = ui
        .push_id("asset_picker_trigger", |ui| {
            egui::Frame::new()
                .fill(theme.colors.surface_raised)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_width(width - 24.0);
                    ui.horizontal(|ui| {
                        render_asset_badge(ui, &view.asset, theme);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&view.asset.symbol).strong());
                            ui.label(RichText::new(&view.asset.name).color(theme.dim).small());
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let chevron = if view.form.is_dropdown_open() { "▲" } else { "▼" };
                            ui.label(RichText::new(chevron).color(theme.dim));
                        });
                    });
                })
                .response
        })
        .inner
        .interact(Sense::click());

    if trigger.clicked() {
        app.handle_dropdown_toggle();
    }

    ui.horizontal(|ui| {
        ui.label(RichText::new("Balance:").color(theme.dim).small());
        ui.label(RichText::new(format!("{} {}", view.asset.balance, view.asset.unit)).small());
    });

    if !view.form.is_dropdown_open() {
        return;
    }

    let list = egui::Frame::new()
        .fill(theme.card)
        .stroke(egui::Stroke::new(1.0, theme.selected))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(4))
        .show(ui, |ui| {
            ui.set_width(width - 8.0);
            for (index, asset) in view.catalog.assets().iter().enumerate() {
                let selected = index == view.form.asset_index;
                if render_asset_row(ui, asset, selected, theme).clicked() {
                    app.handle_asset_select(index);
                }
            }
        })
        .response;

    let picker_rect = trigger.rect.union(list.rect);
    let press = ui.input(|i| {
        if i.pointer.any_pressed() {
            i.pointer.press_origin()
        } else {
            None
        }
    });
    if let Some(pos) = press {
        app.handle_pointer_down(picker_rect.contains(pos));
    }
}

/// One selectable row: badge, symbol and name, balance on the right.
fn render_asset_row(ui: &mut egui::Ui, asset: &Asset, selected: bool, theme: &Theme) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), ROW_HEIGHT), Sense::click());

    if selected || response.hovered() {
        ui.painter().rect_filled(rect, 6.0, theme.colors.surface_raised);
    }

    ui.scope_builder(egui::UiBuilder::new().max_rect(rect.shrink2(egui::vec2(8.0, 4.0))), |ui| {
        ui.horizontal_centered(|ui| {
            render_asset_badge(ui, asset, theme);
            ui.vertical(|ui| {
                let symbol = RichText::new(&asset.symbol).strong();
                ui.label(if selected { symbol.color(theme.selected) } else { symbol });
                ui.label(RichText::new(&asset.name).color(theme.dim).small());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{} {}", asset.balance, asset.unit)).monospace());
            });
        });
    });

    response
}

/// Colored circle with the first letter of the symbol
fn render_asset_badge(ui: &mut egui::Ui, asset: &Asset, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(28.0, 28.0), Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), 14.0, theme.asset_accent(&asset.icon));
    let letter: String = asset.symbol.chars().take(1).collect();
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        letter,
        FontId::proportional(14.0),
        egui::Color32::WHITE,
    );
}
