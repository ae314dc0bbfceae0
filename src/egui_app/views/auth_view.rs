use eframe::egui;

use crate::egui_app::auth::AuthBackend;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::Variant;
use crate::shared::error::{Field, FormError};

const CARD_WIDTH: f32 = 320.0;

pub fn render<B: AuthBackend>(ui: &mut egui::Ui, state: &mut AppState<B>) {
    // Fill the entire background first
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let variant = state.form.variant();

            // Calculate vertical centering
            let total_height = match variant {
                Variant::Login => 420.0,
                Variant::Register => 490.0,
            };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(egui::RichText::new("💬 Messenger").size(32.0).strong().color(colors::TEXT_LIGHT));
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(match variant {
                    Variant::Login => "Sign in to your account",
                    Variant::Register => "Create your account",
                })
                .size(20.0)
                .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(20.0);

            styles::card_frame().show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                    let submitted_with_enter = render_fields(ui, state);
                    ui.add_space(16.0);

                    let loading = state.form.is_loading();
                    let submit = ui.add_enabled(
                        !loading,
                        egui::Button::new(
                            egui::RichText::new(variant.submit_label()).color(colors::TEXT_LIGHT),
                        )
                        .fill(colors::ACCENT)
                        .min_size(egui::vec2(CARD_WIDTH, 32.0)),
                    );
                    if submit.clicked() || (submitted_with_enter && !loading) {
                        state.handle_submit();
                    }

                    if loading {
                        ui.add_space(10.0);
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                        });
                    }

                    ui.add_space(20.0);
                    render_social_buttons(ui, state);
                });
            });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                let caption = variant.toggle_caption();
                let link = variant.toggle_label();
                // Rough centering; egui has no centered horizontal layout
                let text_width = (caption.len() + link.len()) as f32 * 7.0;
                ui.add_space(((available_rect.width() - text_width) / 2.0).max(0.0));
                ui.label(egui::RichText::new(caption).color(colors::TEXT_SECONDARY));
                if ui.link(link).clicked() {
                    state.form.toggle_variant();
                }
            });
        });
    });
}

/// Returns true when Enter was pressed in one of the inputs
fn render_fields<B: AuthBackend>(ui: &mut egui::Ui, state: &mut AppState<B>) -> bool {
    let mut enter_pressed = false;

    for field in state.form.variant().visible_fields() {
        ui.label(egui::RichText::new(field.label()).color(colors::TEXT_SECONDARY));

        let edit = egui::TextEdit::singleline(state.form.values.get_mut(*field))
            .password(*field == Field::Password)
            .desired_width(CARD_WIDTH)
            .text_color(colors::TEXT_LIGHT);
        let response = ui.add(edit);
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            enter_pressed = true;
        }

        if state.form.is_invalid(*field) {
            ui.label(
                egui::RichText::new(FormError::MissingField(*field).to_string())
                    .size(12.0)
                    .color(colors::ERROR),
            );
        }
        ui.add_space(8.0);
    }

    enter_pressed
}

fn render_social_buttons<B: AuthBackend>(ui: &mut egui::Ui, state: &mut AppState<B>) {
    if state.social_providers.is_empty() {
        return;
    }

    ui.vertical_centered(|ui| {
        ui.separator();
        ui.label(egui::RichText::new("Or continue with").size(13.0).color(colors::SEPARATOR));
    });
    ui.add_space(12.0);

    let providers = state.social_providers.clone();
    let spacing = ui.spacing().item_spacing.x;
    let button_width =
        (CARD_WIDTH - spacing * (providers.len() as f32 - 1.0)) / providers.len() as f32;
    let loading = state.form.is_loading();

    ui.horizontal(|ui| {
        for provider in &providers {
            let button = egui::Button::new(provider_label(provider))
                .min_size(egui::vec2(button_width, 32.0));
            if ui.add_enabled(!loading, button).clicked() {
                state.handle_social(provider);
            }
        }
    });
}

/// Display name for a provider id
pub fn provider_label(provider: &str) -> String {
    match provider {
        "github" => "GitHub".to_string(),
        "google" => "Google".to_string(),
        "linkedin" => "LinkedIn".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
