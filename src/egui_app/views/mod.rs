use eframe::egui;

use crate::egui_app::auth::AuthBackend;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod auth_view;
pub mod toast_view;

pub fn render_top_bar(ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("💬 Messenger").size(18.0).strong());
            });
        });
}

pub fn render_main_panel<B: AuthBackend>(ctx: &egui::Context, state: &mut AppState<B>) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| auth_view::render(ui, state));

    toast_view::render(ctx, &state.toasts);
}
