use crate::domain::Direction;
use crate::engine::StatusLine;

/// Every user-facing string in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub connecting: &'static str,
    pub round_prefix: &'static str,
    pub new_round_suffix: &'static str,
    pub betting_suffix: &'static str,
    pub closed_suffix: &'static str,
    pub settled_up: &'static str,
    pub settled_down: &'static str,
    pub settled_unknown: &'static str,
    pub communication_error: &'static str,
    pub bet_accepted_up: &'static str,
    pub bet_accepted_down: &'static str,
    pub bet_rejected: &'static str,
    pub button_up: &'static str,
    pub button_down: &'static str,
    pub badge_up: &'static str,
    pub badge_down: &'static str,
    pub cover_glyph: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Up / Down",
    connecting: "Connecting to the round service...",
    round_prefix: "Round #",
    new_round_suffix: ": place your bet",
    betting_suffix: ": betting open",
    closed_suffix: ": betting closed, revealing result...",
    settled_up: "Result: UP",
    settled_down: "Result: DOWN",
    settled_unknown: "Result: no outcome",
    communication_error: "Communication error with the server",
    bet_accepted_up: "You chose: Up",
    bet_accepted_down: "You chose: Down",
    bet_rejected: "Betting is closed",
    button_up: "▲ Up",
    button_down: "▼ Down",
    badge_up: "▲ UP",
    badge_down: "▼ DOWN",
    cover_glyph: "?",
};

impl UiText {
    pub fn status_line(&self, line: &StatusLine) -> String {
        match line {
            StatusLine::Connecting => self.connecting.to_string(),
            StatusLine::NewRound { id, .. } => {
                format!("{}{}{}", self.round_prefix, id, self.new_round_suffix)
            }
            StatusLine::Betting { id, .. } => {
                format!("{}{}{}", self.round_prefix, id, self.betting_suffix)
            }
            StatusLine::Closed { id } => format!("{}{}{}", self.round_prefix, id, self.closed_suffix),
            StatusLine::Settled { id, outcome } => {
                let result = match outcome {
                    Some(Direction::Up) => self.settled_up,
                    Some(Direction::Down) => self.settled_down,
                    None => self.settled_unknown,
                };
                format!("{}{} {}", self.round_prefix, id, result)
            }
            StatusLine::Other(raw) => raw.clone(),
            StatusLine::CommunicationError => self.communication_error.to_string(),
            StatusLine::BetAccepted(Direction::Up) => self.bet_accepted_up.to_string(),
            StatusLine::BetAccepted(Direction::Down) => self.bet_accepted_down.to_string(),
            StatusLine::BetRejected => self.bet_rejected.to_string(),
        }
    }

    pub fn button(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::Up => self.button_up,
            Direction::Down => self.button_down,
        }
    }

    pub fn badge(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::Up => self.badge_up,
            Direction::Down => self.badge_down,
        }
    }
}
