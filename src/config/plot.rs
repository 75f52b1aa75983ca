//! Graph canvas visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub background_color: Color32,
    pub grid_color: Color32,
    pub axis_label_color: Color32,
    pub line_color: Color32,
    pub up_color: Color32,
    pub down_color: Color32,
    pub cover_color: Color32,
    pub cover_glyph_color: Color32,
    pub cover_shadow_color: Color32,
    /// Width of the price line
    pub line_width: f32,
    /// Width of the horizontal gridlines
    pub grid_line_width: f32,
    /// Blur radius of the shadow cast by the cover
    pub cover_shadow_blur: u8,
    pub cover_glyph_size: f32,
    pub badge_font_size: f32,
    pub axis_font_size: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    background_color: Color32::from_rgb(14, 17, 23),
    grid_color: Color32::from_rgb(38, 44, 56),
    axis_label_color: Color32::from_gray(120),
    line_color: Color32::from_rgb(54, 163, 255), // Sky blue
    up_color: Color32::from_rgb(0, 200, 110),    // Green
    down_color: Color32::from_rgb(230, 60, 60),  // Red
    cover_color: Color32::from_rgb(0, 0, 0),
    cover_glyph_color: Color32::WHITE,
    cover_shadow_color: Color32::from_black_alpha(160),
    line_width: 2.0,
    grid_line_width: 1.0,
    cover_shadow_blur: 24,
    cover_glyph_size: 48.0,
    badge_font_size: 22.0,
    axis_font_size: 11.0,
};
