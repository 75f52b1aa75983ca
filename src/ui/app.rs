use anyhow::Result;
use eframe::{Frame, egui};
use poll_promise::Promise;
use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{RoundPoller, RoundsApi};
use crate::domain::{BetReceipt, Direction, RoundState, RoundStatus};
use crate::engine::{GraphEngine, StatusLine};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::{FrameTimer, now};

/// An in-flight bet, the direction the user clicked and the round it was
/// placed in.
pub(super) struct PendingBet {
    pub(super) direction: Direction,
    pub(super) round_id: Option<u64>,
    pub(super) promise: Promise<Result<BetReceipt>>,
}

/// The widget's lifecycle object: one per host page, started once.
pub struct UpDownApp {
    pub(super) engine: GraphEngine,
    pub(super) poller: RoundPoller,
    pub(super) plot_view: PlotView,

    pub(super) pending_bet: Option<PendingBet>,

    pub(super) status: StatusLine,
    pub(super) controls_visible: bool,
    /// Most recent successful poll, for the countdown
    pub(super) last_round: Option<RoundState>,

    frame_timer: FrameTimer,
    started: bool,
}

impl UpDownApp {
    pub fn new(cc: &eframe::CreationContext<'_>, api: Arc<dyn RoundsApi>, seed: Option<u64>) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        Self::with_engine(GraphEngine::new(seed), RoundPoller::new(api))
    }

    pub fn with_engine(engine: GraphEngine, poller: RoundPoller) -> Self {
        Self {
            engine,
            poller,
            plot_view: PlotView::new(),
            pending_bet: None,
            status: StatusLine::Connecting,
            controls_visible: true,
            last_round: None,
            frame_timer: FrameTimer::default(),
            started: false,
        }
    }

    /// Starts the frame and poll loops. Calling it again is a no-op that
    /// returns `false`.
    pub fn start(&mut self) -> bool {
        if self.started {
            log::warn!("Up/Down widget already started");
            return false;
        }
        self.started = true;
        log::info!("Up/Down widget started ({})", self.poller.api().signature());
        true
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn engine(&self) -> &GraphEngine {
        &self.engine
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Seconds left in the betting window according to the last poll.
    pub(super) fn countdown(&self) -> Option<f64> {
        self.last_round
            .as_ref()
            .filter(|round| round.status == RoundStatus::Betting)
            .map(|round| round.timeleft)
    }
}

impl eframe::App for UpDownApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop in-flight requests before the runtime goes away
        self.pending_bet = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if !self.started {
            return;
        }

        let at = now();
        let dt = self.frame_timer.tick(at);

        // Network completions first, so this frame draws their effect
        self.poll_rounds(at);
        self.poll_bet();

        self.engine.frame(dt);

        self.render_central_panel(ctx);

        // The frame loop never ends
        ctx.request_repaint();
    }
}
