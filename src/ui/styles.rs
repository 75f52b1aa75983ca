use eframe::egui::{Color32, RichText, Ui};
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders the round status line.
    fn label_status(&mut self, text: impl Into<String>, color: Color32);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_status(&mut self, text: impl Into<String>, color: Color32) {
        self.label(RichText::new(text).heading().color(color));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label_status(text, UI_CONFIG.colors.status_error);
    }
}
