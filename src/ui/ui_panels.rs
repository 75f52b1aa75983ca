use eframe::egui::{Align, Button, Layout, Ui, Vec2};
use strum::IntoEnumIterator;

use crate::domain::Direction;
use crate::engine::StatusLine;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Status line plus the two bet buttons under the graph.
pub struct ControlsPanel<'a> {
    status: &'a StatusLine,
    controls_visible: bool,
    /// A bet request is in flight; buttons stay visible but inert
    bet_pending: bool,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(status: &'a StatusLine, controls_visible: bool, bet_pending: bool) -> Self {
        Self {
            status,
            controls_visible,
            bet_pending,
        }
    }

    fn render_status(&self, ui: &mut Ui) {
        let text = UI_TEXT.status_line(self.status);
        match self.status {
            StatusLine::CommunicationError | StatusLine::BetRejected => ui.label_error(text),
            StatusLine::BetAccepted(_) => ui.label_status(text, UI_CONFIG.colors.status_success),
            _ => ui.label_status(text, UI_CONFIG.colors.status),
        }
    }

    fn render_buttons(&self, ui: &mut Ui) -> Option<Direction> {
        let mut chosen = None;
        let button_size = Vec2::new(UI_CONFIG.button_width, 0.0);
        let total = UI_CONFIG.button_width * 2.0 + ui.spacing().item_spacing.x;

        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));
            for direction in Direction::iter() {
                let button = Button::new(UI_TEXT.button(direction)).min_size(button_size);
                if ui.add_enabled(!self.bet_pending, button).clicked() {
                    chosen = Some(direction);
                }
            }
        });
        chosen
    }
}

impl Panel for ControlsPanel<'_> {
    type Event = Direction;

    fn render(&mut self, ui: &mut Ui) -> Vec<Direction> {
        let mut events = Vec::new();

        ui.add_space(UI_CONFIG.status_spacing);
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            self.render_status(ui);
        });

        if self.controls_visible {
            ui.add_space(UI_CONFIG.status_spacing);
            if let Some(direction) = self.render_buttons(ui) {
                events.push(direction);
            }
        }
        events
    }
}
