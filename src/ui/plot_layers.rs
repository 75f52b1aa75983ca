use eframe::egui::epaint::Shadow;
use eframe::egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2, pos2};

use crate::config::{GRAPH, PLOT_CONFIG};
use crate::domain::Direction;
use crate::engine::ViewState;
use crate::models::{Bounds, LineVertex};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_countdown, format_price};

/// Maps graph space (viewport fraction, sample value) onto the canvas.
#[derive(Debug, Clone, Copy)]
pub struct CanvasMapping {
    pub canvas: Rect,
    pub bounds: Bounds,
}

impl CanvasMapping {
    /// Left sub-region of the canvas the line is drawn in.
    pub fn viewport_width(&self) -> f32 {
        self.canvas.width() * GRAPH.viewport_fraction
    }

    pub fn x(&self, fraction: f64) -> f32 {
        self.canvas.left() + fraction as f32 * self.viewport_width()
    }

    /// `bounds.max` lands on the top margin, `bounds.min` on the bottom one.
    pub fn y(&self, value: f64) -> f32 {
        let top = self.canvas.top() + GRAPH.margin_top;
        let bottom = self.canvas.bottom() - GRAPH.margin_bottom;
        bottom - self.bounds.normalize(value) as f32 * (bottom - top)
    }

    pub fn point(&self, vertex: &LineVertex) -> Pos2 {
        pos2(self.x(vertex.x), self.y(vertex.value))
    }

    /// The half of the canvas hidden behind the cover.
    pub fn cover_rect(&self) -> Rect {
        Rect::from_min_max(
            pos2(self.canvas.center().x, self.canvas.top()),
            self.canvas.right_bottom(),
        )
    }
}

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub mapping: CanvasMapping,
    pub line: &'a [LineVertex],
    pub view: &'a ViewState,
    /// Seconds left in the betting window, if betting
    pub countdown: Option<f64>,
}

/// A standardized layer in the canvas stack. Layers only read state.
pub trait PaintLayer {
    fn paint(&self, painter: &Painter, ctx: &LayerContext);
}

// ============================================================================
// 1. BACKGROUND + GRID
// ============================================================================
pub struct GridLayer;

impl PaintLayer for GridLayer {
    fn paint(&self, painter: &Painter, ctx: &LayerContext) {
        let canvas = ctx.mapping.canvas;
        painter.rect_filled(canvas, CornerRadius::ZERO, PLOT_CONFIG.background_color);

        let stroke = Stroke::new(PLOT_CONFIG.grid_line_width, PLOT_CONFIG.grid_color);
        let bounds = ctx.mapping.bounds;
        let lines = GRAPH.grid_lines.max(2);

        for i in 0..lines {
            let value = bounds.min + bounds.span() * i as f64 / (lines - 1) as f64;
            let y = ctx.mapping.y(value);
            painter.hline(canvas.x_range(), y, stroke);
            painter.text(
                pos2(canvas.left() + 4.0, y - 2.0),
                Align2::LEFT_BOTTOM,
                format_price(value),
                FontId::monospace(PLOT_CONFIG.axis_font_size),
                PLOT_CONFIG.axis_label_color,
            );
        }
    }
}

// ============================================================================
// 2. PRICE LINE
// ============================================================================
pub struct PriceLineLayer;

impl PaintLayer for PriceLineLayer {
    fn paint(&self, painter: &Painter, ctx: &LayerContext) {
        if ctx.line.len() < 2 {
            return;
        }
        let points: Vec<Pos2> = ctx.line.iter().map(|v| ctx.mapping.point(v)).collect();
        painter.add(Shape::line(
            points,
            Stroke::new(PLOT_CONFIG.line_width, PLOT_CONFIG.line_color),
        ));
    }
}

// ============================================================================
// 3. COUNTDOWN + OUTCOME BADGE
// ============================================================================
pub struct BadgeLayer;

impl PaintLayer for BadgeLayer {
    fn paint(&self, painter: &Painter, ctx: &LayerContext) {
        let canvas = ctx.mapping.canvas;

        if let Some(seconds) = ctx.countdown {
            painter.text(
                canvas.right_top() + Vec2::new(-10.0, 10.0),
                Align2::RIGHT_TOP,
                format_countdown(seconds),
                FontId::proportional(PLOT_CONFIG.badge_font_size),
                PLOT_CONFIG.cover_glyph_color,
            );
        }

        let Some(outcome) = ctx.view.last_outcome else {
            return;
        };
        let fill = match outcome {
            Direction::Up => PLOT_CONFIG.up_color,
            Direction::Down => PLOT_CONFIG.down_color,
        };

        let galley = painter.layout_no_wrap(
            UI_TEXT.badge(outcome).to_string(),
            FontId::proportional(PLOT_CONFIG.badge_font_size),
            PLOT_CONFIG.cover_glyph_color,
        );
        let padding = Vec2::new(10.0, 6.0);
        let origin = pos2(canvas.center().x, canvas.top() + 12.0);
        let badge = Rect::from_center_size(
            pos2(origin.x, origin.y + galley.size().y / 2.0 + padding.y),
            galley.size() + padding * 2.0,
        );
        painter.rect_filled(badge, CornerRadius::same(6), fill);
        painter.galley(badge.min + padding, galley, PLOT_CONFIG.cover_glyph_color);
    }
}

// ============================================================================
// 4. COVER
// ============================================================================
pub struct CoverLayer;

impl PaintLayer for CoverLayer {
    fn paint(&self, painter: &Painter, ctx: &LayerContext) {
        if !ctx.view.show_cover {
            return;
        }
        let cover = ctx.mapping.cover_rect();

        let shadow = Shadow {
            offset: [0, 0],
            blur: PLOT_CONFIG.cover_shadow_blur,
            spread: 0,
            color: PLOT_CONFIG.cover_shadow_color,
        };
        painter.add(shadow.as_shape(cover, CornerRadius::ZERO));
        painter.rect_filled(cover, CornerRadius::ZERO, PLOT_CONFIG.cover_color);
        painter.text(
            cover.center(),
            Align2::CENTER_CENTER,
            UI_TEXT.cover_glyph,
            FontId::proportional(PLOT_CONFIG.cover_glyph_size),
            PLOT_CONFIG.cover_glyph_color,
        );
    }
}
