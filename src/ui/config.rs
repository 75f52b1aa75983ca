use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub status: Color32,
    pub status_error: Color32,
    pub status_success: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Gap between the canvas and the status line
    pub status_spacing: f32,
    pub button_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        central_panel: Color32::from_rgb(20, 22, 28),
        status: Color32::from_gray(220),
        status_error: Color32::from_rgb(255, 100, 100),
        status_success: Color32::from_rgb(130, 200, 140),
    },
    status_spacing: 12.0,
    button_width: 120.0,
};
