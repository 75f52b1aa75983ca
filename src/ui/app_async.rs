use anyhow::Result;
use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::spawn_request;
use crate::domain::{BetReceipt, Direction, RoundState};
use crate::engine::StatusLine;
use crate::ui::app::{PendingBet, UpDownApp};
use crate::utils::app_time::AppInstant;

impl UpDownApp {
    /// Checks the poll loop and applies a finished poll, if any.
    pub(super) fn poll_rounds(&mut self, at: AppInstant) {
        if let Some(result) = self.poller.poll(at) {
            self.apply_poll_result(result);
        }
    }

    pub(super) fn apply_poll_result(&mut self, result: Result<RoundState>) {
        match result {
            Ok(round) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_round_polls {
                    log::debug!("Poll: {:?}", round);
                }

                let update = self.engine.apply_round(&round);
                if update.new_round {
                    self.controls_visible = true;
                }

                // Bet feedback stays on screen for the rest of the betting window
                let keep_bet_feedback = matches!(update.status, StatusLine::Betting { .. })
                    && matches!(
                        self.status,
                        StatusLine::BetAccepted(_) | StatusLine::BetRejected
                    );
                if !keep_bet_feedback {
                    if let StatusLine::Settled { id, outcome } = &update.status {
                        log::info!("Round #{} settled: {:?}", id, outcome);
                    }
                    self.status = update.status;
                }
                self.last_round = Some(round);
            }
            Err(e) => {
                log::warn!("Round poll failed: {:#}", e);
                self.status = StatusLine::CommunicationError;
            }
        }
    }

    /// Fires a bet request. Ignored while another bet is still in flight.
    pub(super) fn place_bet(&mut self, direction: Direction) {
        if self.pending_bet.is_some() {
            return;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_bets {
            log::info!("Placing bet: {}", direction);
        }

        let api = Arc::clone(self.poller.api());
        let promise = spawn_request(async move { api.place_bet().await });
        self.pending_bet = Some(PendingBet {
            direction,
            round_id: self.engine.view().last_round_id,
            promise,
        });
    }

    pub(super) fn poll_bet(&mut self) {
        let Some(bet) = self.pending_bet.take() else {
            return;
        };
        match bet.promise.try_take() {
            Ok(result) => self.apply_bet_result(bet.direction, bet.round_id, result),
            Err(promise) => self.pending_bet = Some(PendingBet { promise, ..bet }),
        }
    }

    /// Applies a bet response. A response for a round that has since been
    /// replaced is dropped so it cannot hide the new round's controls.
    pub(super) fn apply_bet_result(
        &mut self,
        direction: Direction,
        placed_in: Option<u64>,
        result: Result<BetReceipt>,
    ) {
        let current = self.engine.view().last_round_id;
        if placed_in != current {
            log::info!(
                "Ignoring bet response for round {:?}, now in round {:?}",
                placed_in,
                current
            );
            return;
        }

        match result {
            Ok(receipt) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_bets {
                    log::info!("Bet {} answered: {:?}", direction, receipt);
                }
                self.controls_visible = false;
                self.status = if receipt.ok {
                    StatusLine::BetAccepted(direction)
                } else {
                    StatusLine::BetRejected
                };
            }
            Err(e) => {
                log::warn!("Bet request failed: {:#}", e);
                self.status = StatusLine::CommunicationError;
            }
        }
    }

    pub(super) fn bet_pending(&self) -> bool {
        self.pending_bet.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DemoRounds, RoundPoller};
    use crate::domain::RoundStatus;
    use crate::engine::GraphEngine;
    use anyhow::anyhow;
    use std::time::Duration;

    fn app() -> UpDownApp {
        let api = Arc::new(DemoRounds::new(Some(1)));
        UpDownApp::with_engine(GraphEngine::new(Some(1)), RoundPoller::new(api))
    }

    fn round(id: u64, status: RoundStatus, timeleft: f64) -> RoundState {
        RoundState {
            id,
            status,
            duration: 30.0,
            timeleft,
            outcome: None,
        }
    }

    #[test]
    fn start_is_idempotent() {
        let mut app = app();
        assert!(app.start());
        assert!(!app.start());
        assert!(app.is_started());
    }

    #[test]
    fn poll_failure_shows_communication_error() {
        let mut app = app();
        app.apply_poll_result(Err(anyhow!("connection refused")));
        assert_eq!(app.status(), &StatusLine::CommunicationError);
    }

    #[test]
    fn new_round_reveals_controls_and_announces() {
        let mut app = app();
        app.controls_visible = false;
        app.apply_poll_result(Ok(round(1, RoundStatus::Betting, 30.0)));

        assert!(app.controls_visible());
        assert_eq!(app.status(), &StatusLine::NewRound { id: 1, timeleft: 30.0 });
        assert_eq!(app.countdown(), Some(30.0));
    }

    #[test]
    fn accepted_bet_hides_controls_and_survives_betting_polls() {
        let mut app = app();
        app.apply_poll_result(Ok(round(1, RoundStatus::Betting, 30.0)));
        app.apply_bet_result(
            Direction::Up,
            Some(1),
            Ok(BetReceipt {
                ok: true,
                round_id: Some(1),
                status: None,
            }),
        );
        assert!(!app.controls_visible());
        assert_eq!(app.status(), &StatusLine::BetAccepted(Direction::Up));

        app.apply_poll_result(Ok(round(1, RoundStatus::Betting, 20.0)));
        assert_eq!(app.status(), &StatusLine::BetAccepted(Direction::Up));

        app.apply_poll_result(Ok(round(1, RoundStatus::Closed, 0.0)));
        assert_eq!(app.status(), &StatusLine::Closed { id: 1 });
        assert_eq!(app.countdown(), None);
    }

    #[test]
    fn rejected_bet_reports_betting_closed() {
        let mut app = app();
        app.apply_bet_result(
            Direction::Down,
            None,
            Ok(BetReceipt {
                ok: false,
                round_id: None,
                status: None,
            }),
        );
        assert!(!app.controls_visible());
        assert_eq!(app.status(), &StatusLine::BetRejected);
    }

    #[test]
    fn failed_bet_keeps_controls() {
        let mut app = app();
        app.apply_bet_result(Direction::Down, None, Err(anyhow!("timeout")));
        assert!(app.controls_visible());
        assert_eq!(app.status(), &StatusLine::CommunicationError);
    }

    #[test]
    fn late_bet_response_does_not_hide_next_round_controls() {
        let mut app = app();
        app.apply_poll_result(Ok(round(1, RoundStatus::Betting, 2.0)));
        app.apply_poll_result(Ok(round(2, RoundStatus::Betting, 30.0)));

        app.apply_bet_result(
            Direction::Up,
            Some(1),
            Ok(BetReceipt {
                ok: true,
                round_id: Some(1),
                status: None,
            }),
        );
        assert!(app.controls_visible());
        assert_eq!(app.status(), &StatusLine::NewRound { id: 2, timeleft: 30.0 });
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn bet_round_trip_against_demo_feed() {
        let mut app = app();
        app.place_bet(Direction::Up);
        assert!(app.bet_pending());

        // A second click while pending is ignored
        app.place_bet(Direction::Down);

        while app.bet_pending() {
            app.poll_bet();
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        assert_eq!(app.status(), &StatusLine::BetAccepted(Direction::Up));
        assert!(!app.controls_visible());
    }
}
