use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::egui_app::toast::Toasts;

/// Stack the live toasts at the bottom centre, above everything else.
pub fn render(ctx: &egui::Context, toasts: &Toasts) {
    if toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in toasts.iter() {
                let (icon, color) = if toast.is_error() {
                    ("✖", colors::ERROR)
                } else {
                    ("✔", colors::SUCCESS)
                };

                styles::toast_frame(toast.is_error()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(color, icon);
                        ui.colored_label(colors::TEXT_LIGHT, toast.message());
                    });
                });
                ui.add_space(6.0);
            }
        });
}
