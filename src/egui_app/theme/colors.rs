//! Color Constants for the Auth Screen
//!
//! Warm brown/tan scheme shared by the form, the top bar and the toasts.

use eframe::egui::Color32;

/// Dark background for main areas
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Card behind the form - Dark brown
pub const CARD_BG: Color32 = Color32::from_rgb(0x3A, 0x27, 0x21);

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Accent color for the primary button
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xD0, 0xC0, 0xB0);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);
