//! Theme Module
//!
//! Color constants and frame builders for the auth screen.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     // Form content
//! });
//! ```

pub mod colors;
pub mod styles;
