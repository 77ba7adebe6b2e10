//! # Form Components
//!
//! Reusable form elements for consistent styling across the page

use egui::{FontId, RichText};

use crate::ui::theme::Theme;

const LABEL_SIZE: f32 = 13.0;
const INPUT_SIZE: f32 = 16.0;

/// Render a labelled single-line text input bound to `value`.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    width: f32,
    theme: &Theme,
) -> egui::Response {
    render_field_label(ui, label, theme);
    ui.add_sized(
        [width, 32.0],
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .font(FontId::proportional(INPUT_SIZE)),
    )
}

/// Render a styled button with optional fill
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
    enabled: bool,
) -> egui::Response {
    let mut button = egui::Button::new(RichText::new(text).font(FontId::proportional(15.0)).strong());

    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    if let Some(size) = min_size {
        button = button.min_size(size);
    }

    ui.add_enabled(enabled, button)
}

/// Small uppercase-style caption above a field
pub fn render_field_label(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(
        RichText::new(text)
            .font(FontId::proportional(LABEL_SIZE))
            .color(theme.dim),
    );
}

/// Render a card heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(
        RichText::new(text)
            .font(FontId::proportional(20.0))
            .strong()
            .color(theme.normal),
    );
    ui.add_space(8.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(
        RichText::new(hint)
            .font(FontId::proportional(LABEL_SIZE))
            .color(theme.dim),
    );
}

/// Label on the left, value on the right, one row.
pub fn render_key_value(ui: &mut egui::Ui, key: &str, value: impl Into<RichText>, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(key).color(theme.dim));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value.into());
        });
    });
}

/// Framed card container
pub fn card<R>(ui: &mut egui::Ui, theme: &Theme, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::new()
        .fill(theme.card)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(16))
        .show(ui, add_contents)
        .inner
}
