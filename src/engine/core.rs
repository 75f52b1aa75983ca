use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GRAPH;
use crate::domain::RoundState;
use crate::models::{LineVertex, PriceRing, ScaleTracker, SeriesGenerator, line_vertices};

use super::clock::StepClock;
use super::messages::RoundUpdate;
use super::state::ViewState;

/// Owns every piece of mutable graph state. The poll handler and the frame
/// loop both go through `&mut self`, so updates never interleave.
pub struct GraphEngine {
    generator: SeriesGenerator,
    ring: PriceRing,
    scale: ScaleTracker,
    clock: StepClock,
    view: ViewState,
    rng: StdRng,
    /// Sub-step progress of the last frame
    progress: f64,
}

impl GraphEngine {
    /// `seed` makes the line reproducible; `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(SeriesGenerator::default(), StepClock::default(), rng)
    }

    pub fn with_parts(generator: SeriesGenerator, clock: StepClock, mut rng: StdRng) -> Self {
        let ring = PriceRing::seeded(GRAPH.ring_len, GRAPH.smoothing_window, &generator, &mut rng);
        let scale = ScaleTracker::new(&ring);
        Self {
            generator,
            ring,
            scale,
            clock,
            view: ViewState::default(),
            rng,
            progress: 0.0,
        }
    }

    /// THE FRAME STEP.
    /// Advances simulated time by `dt` seconds, runs any due generator steps
    /// and eases the Y-axis. Returns the interpolation fraction for drawing.
    pub fn frame(&mut self, dt: f64) -> f64 {
        let advance = self.clock.advance(dt, self.view.paused);

        for _ in 0..advance.steps {
            self.step();
        }

        if advance.steps > 0 {
            self.scale.recompute_target(&self.ring);
        }
        self.scale.tick();

        self.progress = advance.t;
        advance.t
    }

    /// One discrete generator step into the ring.
    fn step(&mut self) {
        let next = self
            .generator
            .sample(self.ring.newest(), self.view.bias, &mut self.rng);
        self.ring.advance(next);
    }

    /// Applies a successful poll. A new round snaps the Y-axis so nothing
    /// carries over visually from the previous round.
    pub fn apply_round(&mut self, round: &RoundState) -> RoundUpdate {
        let update = self.view.apply_round(round);
        if update.new_round {
            log::info!("Round #{} observed ({})", round.id, round.status);
            self.scale.snap_to(&self.ring);
        }
        update
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn ring(&self) -> &PriceRing {
        &self.ring
    }

    pub fn scale(&self) -> &ScaleTracker {
        &self.scale
    }

    /// Line geometry for the current frame.
    pub fn line(&self) -> Vec<LineVertex> {
        line_vertices(&self.ring, self.progress)
    }
}
