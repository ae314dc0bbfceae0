/**
 * egui Native Desktop App - Main Entry Point
 *
 * Loads configuration, initialises tracing and runs the authentication
 * screen.
 */
use eframe::egui;
use messenger_auth::egui_app::theme::styles;
use messenger_auth::egui_app::{views, AppState, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::load()?;
    tracing::info!(
        server = config.server_url(),
        timeout_secs = config.request_timeout().as_secs(),
        "starting auth app"
    );
    let state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Messenger",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(AuthApp { state }))
        }),
    )?;

    Ok(())
}

/// Main application state
struct AuthApp {
    state: AppState,
}

impl eframe::App for AuthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_auth_result();

        views::render_top_bar(ctx);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
