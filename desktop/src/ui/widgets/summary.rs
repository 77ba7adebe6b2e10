//! # Transaction Summary Panel

use egui::RichText;
use lib_core::model::conversion::{rate_display, ASSET_DECIMALS};

use crate::app::{App, ExchangeView};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the live summary for the current form values
pub fn render_summary(ui: &mut egui::Ui, view: &ExchangeView, theme: &Theme) {
    forms::card(ui, theme, |ui| {
        forms::render_form_heading(ui, "Transaction Summary", theme);

        forms::render_key_value(
            ui,
            "You send",
            RichText::new(format!("{} {}", view.conversion.asset_display(), view.asset.symbol)).monospace(),
            theme,
        );
        forms::render_key_value(ui, "Exchange rate", rate_display(&view.asset), theme);
        forms::render_key_value(
            ui,
            "You receive",
            RichText::new(format!("₦{}", view.conversion.naira_display()))
                .strong()
                .color(theme.selected),
            theme,
        );
        forms::render_key_value(ui, "USD value", format!("${}", view.conversion.usd_display()), theme);

        if let Some(verified) = &view.form.verification {
            ui.separator();
            forms::render_key_value(
                ui,
                "Account holder",
                RichText::new(&verified.name).color(theme.success),
                theme,
            );
        }
    });
}

/// Reference of the last submitted transfer, with a button that starts a fresh form
pub fn render_last_transfer(ui: &mut egui::Ui, view: &ExchangeView, app: &mut App, theme: &Theme) {
    let Some(summary) = &view.last_summary else {
        return;
    };

    ui.add_space(12.0);
    forms::card(ui, theme, |ui| {
        forms::render_form_heading(ui, "Last Transfer", theme);
        forms::render_key_value(ui, "Reference", RichText::new(&summary.reference).monospace(), theme);
        forms::render_key_value(ui, "Initiated", lib_utils::format_time(summary.created_at), theme);
        forms::render_key_value(
            ui,
            "Sent",
            format!(
                "{} {}",
                lib_utils::format_fixed(summary.asset_amount, ASSET_DECIMALS),
                summary.asset_symbol
            ),
            theme,
        );
        forms::render_key_value(ui, "To", format!("{} ({})", summary.account_number, summary.bank_label), theme);

        ui.add_space(8.0);
        if forms::render_button(ui, "New transfer", None, None, true).clicked() {
            app.handle_reset();
        }
    });
}
