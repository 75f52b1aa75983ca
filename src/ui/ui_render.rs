use eframe::egui::{CentralPanel, Context, Frame, Margin};

use crate::ui::config::UI_CONFIG;
use crate::ui::ui_panels::{ControlsPanel, Panel};

use super::app::UpDownApp;

impl UpDownApp {
    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                self.plot_view.show(ui, &self.engine, self.countdown());

                let clicked = ControlsPanel::new(
                    &self.status,
                    self.controls_visible,
                    self.bet_pending(),
                )
                .render(ui);

                for direction in clicked {
                    self.place_bet(direction);
                }
            });
    }
}
