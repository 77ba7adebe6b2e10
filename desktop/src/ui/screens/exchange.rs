//! # Exchange Screen
//!
//! The single page of the desk: asset picker and naira amount on the left, bank form and
//! submit gate below it, live summary on the right.
//!
//! Inputs are edited in a local copy of the snapshot value; a change is forwarded to the
//! matching `App::handle_*` method, which stores the sanitized value for the next frame.

use egui::{FontId, RichText};

use crate::app::{App, ExchangeView};
use crate::ui::theme::Theme;
use crate::ui::widgets::{asset_picker, forms, summary};

const BANK_PLACEHOLDER: &str = "Select your bank";

/// Render exchange screen
pub fn render(ui: &mut egui::Ui, view: &ExchangeView, app: &mut App) {
    let theme = Theme::default();

    ui.columns(2, |columns| {
        forms::card(&mut columns[0], &theme, |ui| {
            render_amount_section(ui, view, app, &theme);
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(16.0);
            render_bank_section(ui, view, app, &theme);
            ui.add_space(16.0);
            render_submit(ui, view, app, &theme);
        });

        summary::render_summary(&mut columns[1], view, &theme);
        summary::render_last_transfer(&mut columns[1], view, app, &theme);
    });
}

fn render_amount_section(ui: &mut egui::Ui, view: &ExchangeView, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, "Sell Crypto", theme);

    forms::render_field_label(ui, "Select asset", theme);
    asset_picker::render_asset_picker(ui, view, app, theme);
    ui.add_space(12.0);

    let width = ui.available_width();
    let mut amount = view.form.naira_amount.clone();
    let response = forms::render_text_input(ui, "Amount (₦)", &mut amount, "0", width, theme);
    if response.changed() {
        app.handle_amount_change(&amount);
    }

    ui.horizontal(|ui| {
        forms::render_hint(ui, &format!("≈ ${}", view.conversion.usd_display()), theme);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!(
                    "{} {}",
                    view.conversion.asset_display(),
                    view.asset.symbol
                ))
                .monospace()
                .color(theme.selected),
            );
        });
    });
}

fn render_bank_section(ui: &mut egui::Ui, view: &ExchangeView, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, "Receiving Account", theme);

    let width = ui.available_width();
    let mut account = view.form.account_number.clone();
    let response =
        forms::render_text_input(ui, "Account number", &mut account, "10-digit NUBAN", width, theme);
    if response.changed() {
        app.handle_account_number_change(&account);
    }
    ui.add_space(8.0);

    forms::render_field_label(ui, "Bank", theme);
    let mut selected = view.form.bank_id.clone();
    egui::ComboBox::from_id_salt("bank_select")
        .width(width)
        .selected_text(view.bank_label.as_deref().unwrap_or(BANK_PLACEHOLDER))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, BANK_PLACEHOLDER);
            for bank in view.catalog.banks() {
                ui.selectable_value(&mut selected, Some(bank.id.clone()), bank.label.as_str());
            }
        });
    if selected != view.form.bank_id {
        app.handle_bank_select(selected.as_deref());
    }

    if let Some(verified) = &view.form.verification {
        ui.add_space(8.0);
        egui::Frame::new()
            .fill(theme.colors.surface_raised)
            .stroke(egui::Stroke::new(1.0, theme.success))
            .corner_radius(6.0)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.label(RichText::new("✔ Account verified").color(theme.success).small());
                ui.label(RichText::new(&verified.name).strong());
                ui.label(RichText::new(&verified.bank).color(theme.dim).small());
            });
    }
}

fn render_submit(ui: &mut egui::Ui, view: &ExchangeView, app: &mut App, theme: &Theme) {
    let size = egui::vec2(ui.available_width(), 44.0);
    let clicked = forms::render_button(
        ui,
        view.submit_label,
        Some(theme.submit_fill(view.can_submit)),
        Some(size),
        view.can_submit,
    )
    .clicked();

    if clicked {
        app.handle_submit_click();
    }

    ui.add_space(6.0);
    ui.label(
        RichText::new("Rates are fixed for the session. Transfers settle to the account shown above.")
            .font(FontId::proportional(11.0))
            .color(theme.dim),
    );
}
