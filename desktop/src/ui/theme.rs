//! # GUI Theme
//!
//! Dark navy exchange-desk theme with an emerald accent for egui.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Exchange desk color palette
#[derive(Debug, Clone)]
pub struct ExchangeColors {
    /// Page background
    pub background: Color32,
    /// Card and panel surface
    pub surface: Color32,
    /// Raised surface (inputs, dropdown rows)
    pub surface_raised: Color32,
    /// Primary text
    pub text: Color32,
    /// Secondary text
    pub text_secondary: Color32,
    /// Emerald accent (primary actions)
    pub accent: Color32,
    /// Darker accent for pressed states
    pub accent_dark: Color32,
    /// Borders
    pub border: Color32,
    /// Success green
    pub success: Color32,
    /// Warning amber
    pub warning: Color32,
    /// Error red
    pub error: Color32,
    /// Info blue
    pub info: Color32,
    /// Disabled control fill
    pub disabled: Color32,
}

impl Default for ExchangeColors {
    fn default() -> Self {
        ExchangeColors {
            background: Color32::from_rgb(11, 17, 32),       // #0B1120
            surface: Color32::from_rgb(17, 24, 39),          // #111827
            surface_raised: Color32::from_rgb(31, 41, 55),   // #1F2937
            text: Color32::from_rgb(243, 244, 246),          // #F3F4F6
            text_secondary: Color32::from_rgb(156, 163, 175), // #9CA3AF
            accent: Color32::from_rgb(16, 185, 129),         // #10B981
            accent_dark: Color32::from_rgb(4, 120, 87),      // #047857
            border: Color32::from_rgb(55, 65, 81),           // #374151
            success: Color32::from_rgb(34, 197, 94),         // #22C55E
            warning: Color32::from_rgb(245, 158, 11),        // #F59E0B
            error: Color32::from_rgb(239, 68, 68),           // #EF4444
            info: Color32::from_rgb(59, 130, 246),           // #3B82F6
            disabled: Color32::from_rgb(75, 85, 99),         // #4B5563
        }
    }
}

/// Application theme
pub struct Theme {
    /// Color palette
    pub colors: ExchangeColors,
    /// Normal text color
    pub normal: Color32,
    /// Accent for primary actions and highlights
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    /// Card fill
    pub card: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = ExchangeColors::default();
        Theme {
            normal: colors.text,
            selected: colors.accent,
            border: colors.border,
            dim: colors.text_secondary,
            success: colors.success,
            error: colors.error,
            warning: colors.warning,
            info: colors.info,
            card: colors.surface,
            colors,
        }
    }
}

impl Theme {
    /// Badge color for an asset icon key. Unknown keys get the accent.
    pub fn asset_accent(&self, icon: &str) -> Color32 {
        match icon {
            "btc" => Color32::from_rgb(247, 147, 26),
            "eth" => Color32::from_rgb(98, 126, 234),
            "bnb" => Color32::from_rgb(243, 186, 47),
            "sol" => Color32::from_rgb(153, 69, 255),
            "usdt" => Color32::from_rgb(38, 161, 123),
            "usdc" => Color32::from_rgb(39, 117, 202),
            _ => self.selected,
        }
    }

    /// Fill for the submit button given the gate state
    pub fn submit_fill(&self, enabled: bool) -> Color32 {
        if enabled {
            self.colors.accent
        } else {
            self.colors.disabled
        }
    }

    /// egui Visuals for the exchange palette
    pub fn exchange_visuals(colors: &ExchangeColors) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);

        visuals.faint_bg_color = colors.surface;
        visuals.extreme_bg_color = colors.surface_raised;
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.surface_raised;
        visuals.widgets.inactive.weak_bg_fill = colors.surface_raised;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.hovered.bg_fill = colors.surface_raised;
        visuals.widgets.hovered.weak_bg_fill = colors.surface_raised;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.accent);

        visuals.widgets.active.bg_fill = colors.accent_dark;
        visuals.widgets.active.weak_bg_fill = colors.accent_dark;
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.accent);

        visuals.widgets.open.bg_fill = colors.surface_raised;
        visuals.widgets.open.bg_stroke = Stroke::new(1.5, colors.accent);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(16, 185, 129, 64);
        visuals.selection.stroke = Stroke::new(1.5, colors.accent);

        visuals.hyperlink_color = colors.info;

        visuals
    }

    /// Apply the exchange theme to an egui context
    ///
    /// Uses `style_mut_of` for both egui themes so a system theme switch keeps the palette.
    pub fn apply_exchange_theme(ctx: &Context) {
        let visuals = Self::exchange_visuals(&ExchangeColors::default());

        for egui_theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
                style.spacing.window_margin = egui::Margin::same(12);
            });
        }

        tracing::debug!("Applied exchange theme visuals and spacing using style_mut_of API");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_accent_falls_back_to_selected() {
        let theme = Theme::default();
        assert_eq!(theme.asset_accent("doge"), theme.selected);
        assert_ne!(theme.asset_accent("btc"), theme.selected);
    }

    #[test]
    fn test_submit_fill_tracks_gate() {
        let theme = Theme::default();
        assert_eq!(theme.submit_fill(true), theme.colors.accent);
        assert_eq!(theme.submit_fill(false), theme.colors.disabled);
    }
}
