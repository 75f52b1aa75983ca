use eframe::egui::{Context, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Formats an axis value with precision that suits its magnitude.
/// - Large (>=1000): 0 decimals
/// - Medium (>=10): 1 decimal
/// - Small: 2 decimals
pub fn format_price(price: f64) -> String {
    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        format!("{:.0}", price)
    } else if abs_price >= 10.0 {
        format!("{:.1}", price)
    } else {
        format!("{:.2}", price)
    }
}

/// Whole seconds left, rounded up so the countdown reads 1 until it hits 0.
pub fn format_countdown(seconds: f64) -> String {
    format!("{}", seconds.max(0.0).ceil() as u64)
}
