use crate::config::ROUNDS;
use crate::domain::{Bias, Direction, RoundState, RoundStatus};

use super::messages::{RoundUpdate, StatusLine};

/// View flags derived from the round service.
///
/// Owned by the engine; the poller writes it through `apply_round` and the
/// frame loop and renderer read it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub last_outcome: Option<Direction>,
    /// Conceal the right half of the graph
    pub show_cover: bool,
    /// Freeze the line (generator stops stepping)
    pub paused: bool,
    pub bias: Bias,
    pub last_round_id: Option<u64>,
}

impl ViewState {
    /// Clears everything except the round id.
    pub fn reset(&mut self) {
        self.last_outcome = None;
        self.show_cover = false;
        self.paused = false;
        self.bias = Bias::Neutral;
    }

    pub fn apply_round(&mut self, round: &RoundState) -> RoundUpdate {
        self.apply_round_with_cover_at(round, ROUNDS.cover_at_sec)
    }

    pub fn apply_round_with_cover_at(&mut self, round: &RoundState, cover_at_sec: f64) -> RoundUpdate {
        let new_round = self.last_round_id != Some(round.id);
        if new_round {
            self.reset();
            self.last_round_id = Some(round.id);
        }

        self.show_cover = round.status != RoundStatus::Settled && round.elapsed() >= cover_at_sec;
        self.paused = self.show_cover && round.status == RoundStatus::Betting;

        let status = match &round.status {
            RoundStatus::Betting if new_round => StatusLine::NewRound {
                id: round.id,
                timeleft: round.timeleft,
            },
            RoundStatus::Betting => StatusLine::Betting {
                id: round.id,
                timeleft: round.timeleft,
            },
            RoundStatus::Closed => {
                // Drift starts before the result is official
                self.bias = match round.outcome {
                    Some(Direction::Up) => Bias::Up,
                    _ => Bias::Down,
                };
                StatusLine::Closed { id: round.id }
            }
            RoundStatus::Settled => {
                self.last_outcome = round.outcome;
                self.bias = round.outcome.map(Bias::from).unwrap_or_default();
                self.show_cover = false;
                self.paused = false;
                StatusLine::Settled {
                    id: round.id,
                    outcome: round.outcome,
                }
            }
            RoundStatus::Other(raw) => StatusLine::Other(raw.clone()),
        };

        RoundUpdate { new_round, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(id: u64, status: &str, duration: f64, timeleft: f64, outcome: Option<Direction>) -> RoundState {
        RoundState {
            id,
            status: RoundStatus::from(status.to_string()),
            duration,
            timeleft,
            outcome,
        }
    }

    #[test]
    fn fresh_betting_round_is_uncovered_and_announced() {
        let mut view = ViewState::default();
        let update = view.apply_round(&round(1, "betting", 30.0, 30.0, None));

        assert!(update.new_round);
        assert_eq!(update.status, StatusLine::NewRound { id: 1, timeleft: 30.0 });
        assert!(!view.show_cover);
        assert!(!view.paused);
        assert_eq!(view.last_round_id, Some(1));
    }

    #[test]
    fn late_betting_phase_covers_and_pauses() {
        let mut view = ViewState::default();
        view.apply_round(&round(1, "betting", 30.0, 30.0, None));
        let update = view.apply_round(&round(1, "betting", 30.0, 14.0, None));

        assert!(!update.new_round);
        assert_eq!(update.status, StatusLine::Betting { id: 1, timeleft: 14.0 });
        assert!(view.show_cover);
        assert!(view.paused);
    }

    #[test]
    fn cover_threshold_is_inclusive() {
        let mut view = ViewState::default();
        view.apply_round(&round(1, "betting", 30.0, 15.0, None));
        assert!(view.show_cover);
        view.apply_round(&round(1, "betting", 30.0, 15.5, None));
        assert!(!view.show_cover);
    }

    #[test]
    fn closed_round_biases_and_keeps_cover_but_resumes() {
        let mut view = ViewState::default();
        view.apply_round(&round(1, "betting", 30.0, 14.0, None));
        let update = view.apply_round(&round(1, "closed", 30.0, 5.0, Some(Direction::Up)));

        assert_eq!(update.status, StatusLine::Closed { id: 1 });
        assert_eq!(view.bias, Bias::Up);
        assert!(view.show_cover);
        assert!(!view.paused);
    }

    #[test]
    fn closed_without_outcome_biases_down() {
        let mut view = ViewState::default();
        view.apply_round(&round(1, "closed", 30.0, 0.0, None));
        assert_eq!(view.bias, Bias::Down);
    }

    #[test]
    fn settled_round_reveals_outcome() {
        let mut view = ViewState::default();
        view.apply_round(&round(1, "closed", 30.0, 0.0, Some(Direction::Down)));
        let update = view.apply_round(&round(1, "settled", 0.0, 0.0, Some(Direction::Down)));

        assert_eq!(
            update.status,
            StatusLine::Settled { id: 1, outcome: Some(Direction::Down) }
        );
        assert_eq!(view.last_outcome, Some(Direction::Down));
        assert_eq!(view.bias, Bias::Down);
        assert!(!view.show_cover);
        assert!(!view.paused);
    }

    #[test]
    fn each_new_id_resets_before_applying_its_own_flags() {
        let mut view = ViewState::default();
        view.apply_round(&round(1, "settled", 30.0, 0.0, Some(Direction::Up)));
        assert_eq!(view.last_outcome, Some(Direction::Up));

        // New round already deep into betting: reset, then covered again
        let update = view.apply_round(&round(2, "betting", 30.0, 10.0, None));
        assert!(update.new_round);
        assert_eq!(view.last_outcome, None);
        assert_eq!(view.bias, Bias::Neutral);
        assert!(view.show_cover);
        assert!(view.paused);

        let update = view.apply_round(&round(3, "betting", 30.0, 30.0, None));
        assert!(update.new_round);
        assert!(!view.show_cover);
        assert!(!view.paused);
    }

    #[test]
    fn repeated_identical_polls_are_idempotent() {
        let mut view = ViewState::default();
        let settled = round(4, "settled", 30.0, 0.0, Some(Direction::Up));
        view.apply_round(&settled);
        let snapshot = view.clone();

        for _ in 0..5 {
            let update = view.apply_round(&settled);
            assert!(!update.new_round);
        }
        assert_eq!(view, snapshot);
    }

    #[test]
    fn unknown_status_is_shown_verbatim() {
        let mut view = ViewState::default();
        let update = view.apply_round(&round(9, "paused-for-maintenance", 30.0, 30.0, None));
        assert_eq!(update.status, StatusLine::Other("paused-for-maintenance".to_string()));
    }
}
