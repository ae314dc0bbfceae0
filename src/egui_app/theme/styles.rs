//! Theme Styling Functions
//!
//! Frame builders so the auth view and toasts share one look.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.override_text_color = Some(colors::TEXT_LIGHT);

    style.visuals.widgets.inactive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.hovered.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.bg_fill = colors::ACCENT;

    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Card holding the form
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(40, 32))
}

/// Frame for one toast
pub fn toast_frame(is_error: bool) -> egui::Frame {
    let accent = if is_error { colors::ERROR } else { colors::SUCCESS };

    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .stroke(Stroke::new(1.0, accent))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(14, 10))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}
