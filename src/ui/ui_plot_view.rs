use eframe::egui::{self, Sense, Vec2};

use crate::config::GRAPH;
use crate::engine::GraphEngine;

use crate::ui::plot_layers::{
    BadgeLayer, CanvasMapping, CoverLayer, GridLayer, LayerContext, PaintLayer, PriceLineLayer,
};

/// The graph canvas: full available width, fixed height, repainted each frame.
pub struct PlotView {
    layers: Vec<Box<dyn PaintLayer>>,
}

impl Default for PlotView {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotView {
    pub fn new() -> Self {
        // Draw order matters: the cover must end up on top of everything
        Self {
            layers: vec![
                Box::new(GridLayer),
                Box::new(PriceLineLayer),
                Box::new(BadgeLayer),
                Box::new(CoverLayer),
            ],
        }
    }

    /// Draws the current engine state. Reads only; the engine was already
    /// advanced for this frame.
    pub fn show(&self, ui: &mut egui::Ui, engine: &GraphEngine, countdown: Option<f64>) {
        let size = Vec2::new(ui.available_width(), GRAPH.canvas_height);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());

        let line = engine.line();
        let ctx = LayerContext {
            mapping: CanvasMapping {
                canvas: response.rect,
                bounds: engine.scale().current(),
            },
            line: &line,
            view: engine.view(),
            countdown,
        };

        for layer in &self.layers {
            layer.paint(&painter, &ctx);
        }
    }
}
