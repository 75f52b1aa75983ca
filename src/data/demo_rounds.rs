//! In-process round feed for running the widget without a backend.
//!
//! Betting lasts `DEMO.round_duration_sec`, then the round closes with a coin
//! flip outcome, settles `DEMO.reveal_delay_sec` later, and the next request
//! after that opens a new round.

use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::DEMO;
use crate::data::rounds_api::RoundsApi;
use crate::domain::{BetReceipt, Direction, RoundState, RoundStatus};
use crate::utils::app_time::{AppInstant, now};

struct DemoRound {
    id: u64,
    ends_at: AppInstant,
    reveal_at: Option<AppInstant>,
    status: RoundStatus,
    outcome: Option<Direction>,
}

struct DemoClock {
    /// Starts as a settled round #0 so the first request opens round #1
    current: DemoRound,
    rng: StdRng,
}

pub struct DemoRounds {
    clock: Mutex<DemoClock>,
    round_duration: Duration,
    reveal_delay: Duration,
}

impl Default for DemoRounds {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DemoRounds {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            clock: Mutex::new(DemoClock {
                current: DemoRound {
                    id: 0,
                    ends_at: now(),
                    reveal_at: None,
                    status: RoundStatus::Settled,
                    outcome: None,
                },
                rng,
            }),
            round_duration: Duration::from_secs(DEMO.round_duration_sec),
            reveal_delay: Duration::from_secs(DEMO.reveal_delay_sec),
        }
    }

    /// Moves the round forward to `at` and reports it.
    pub fn state_at(&self, at: AppInstant) -> RoundState {
        let mut clock = self.clock.lock().unwrap_or_else(PoisonError::into_inner);
        let round = self.ensure_round(&mut clock, at);

        let timeleft = if round.status == RoundStatus::Betting {
            round.ends_at.saturating_duration_since(at).as_secs() as f64
        } else {
            0.0
        };

        RoundState {
            id: round.id,
            status: round.status.clone(),
            duration: self.round_duration.as_secs() as f64,
            timeleft,
            outcome: round.outcome,
        }
    }

    /// A bet is accepted only while the current round is betting.
    pub fn bet_at(&self, at: AppInstant) -> BetReceipt {
        let mut clock = self.clock.lock().unwrap_or_else(PoisonError::into_inner);
        let round = self.ensure_round(&mut clock, at);
        BetReceipt {
            ok: round.status == RoundStatus::Betting,
            round_id: Some(round.id),
            status: Some(round.status.clone()),
        }
    }

    fn ensure_round<'a>(&self, clock: &'a mut DemoClock, at: AppInstant) -> &'a DemoRound {
        let round = &mut clock.current;

        if round.status == RoundStatus::Settled {
            *round = DemoRound {
                id: round.id + 1,
                ends_at: at + self.round_duration,
                reveal_at: None,
                status: RoundStatus::Betting,
                outcome: None,
            };
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_demo_rounds {
                log::info!("Demo round #{} opened", round.id);
            }
        } else if round.status == RoundStatus::Betting && at >= round.ends_at {
            let outcome = if clock.rng.gen_bool(0.5) {
                Direction::Up
            } else {
                Direction::Down
            };
            round.status = RoundStatus::Closed;
            round.outcome = Some(outcome);
            round.reveal_at = Some(at + self.reveal_delay);
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_demo_rounds {
                log::info!("Demo round #{} closed ({})", round.id, outcome);
            }
        } else if round.status == RoundStatus::Closed
            && round.reveal_at.is_some_and(|reveal| at >= reveal)
        {
            round.status = RoundStatus::Settled;
        }

        &clock.current
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RoundsApi for DemoRounds {
    fn signature(&self) -> &'static str {
        "Demo Round Feed"
    }

    async fn fetch_state(&self) -> Result<RoundState> {
        Ok(self.state_at(now()))
    }

    async fn place_bet(&self) -> Result<BetReceipt> {
        Ok(self.bet_at(now()))
    }
}
