use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction a player can bet on, and the outcome of a round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Phase of a round as reported by the round service.
/// Unknown phases are kept verbatim so they can be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoundStatus {
    Betting,
    Closed,
    Settled,
    Other(String),
}

impl From<String> for RoundStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "betting" => RoundStatus::Betting,
            "closed" => RoundStatus::Closed,
            "settled" => RoundStatus::Settled,
            _ => RoundStatus::Other(raw),
        }
    }
}

impl From<RoundStatus> for String {
    fn from(status: RoundStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundStatus::Betting => write!(f, "betting"),
            RoundStatus::Closed => write!(f, "closed"),
            RoundStatus::Settled => write!(f, "settled"),
            RoundStatus::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Body of `GET /api/rounds/state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub id: u64,
    pub status: RoundStatus,
    /// Length of the betting phase in seconds
    #[serde(default)]
    pub duration: f64,
    /// Seconds remaining in the betting phase
    #[serde(default)]
    pub timeleft: f64,
    #[serde(default)]
    pub outcome: Option<Direction>,
}

impl RoundState {
    /// Seconds since the round opened.
    pub fn elapsed(&self) -> f64 {
        self.duration - self.timeleft
    }
}

/// Body of `POST /api/rounds/bet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetReceipt {
    pub ok: bool,
    #[serde(default)]
    pub round_id: Option<u64>,
    #[serde(default)]
    pub status: Option<RoundStatus>,
}

/// Directional nudge fed into the series generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bias {
    Down,
    #[default]
    Neutral,
    Up,
}

impl Bias {
    pub fn as_f64(self) -> f64 {
        match self {
            Bias::Down => -1.0,
            Bias::Neutral => 0.0,
            Bias::Up => 1.0,
        }
    }
}

impl From<Direction> for Bias {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Bias::Up,
            Direction::Down => Bias::Down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_state_payload() {
        let json = r#"{"id":7,"status":"closed","timeleft":0,"outcome":"up","duration":30}"#;
        let state: RoundState = serde_json::from_str(json).unwrap();

        assert_eq!(state.id, 7);
        assert_eq!(state.status, RoundStatus::Closed);
        assert_eq!(state.outcome, Some(Direction::Up));
        assert_eq!(state.elapsed(), 30.0);
    }

    #[test]
    fn null_outcome_and_missing_timing_fields_default() {
        let json = r#"{"id":1,"status":"settled","outcome":null}"#;
        let state: RoundState = serde_json::from_str(json).unwrap();

        assert_eq!(state.outcome, None);
        assert_eq!(state.duration, 0.0);
        assert_eq!(state.timeleft, 0.0);
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let json = r#"{"id":3,"status":"maintenance","duration":30,"timeleft":30}"#;
        let state: RoundState = serde_json::from_str(json).unwrap();

        assert_eq!(state.status, RoundStatus::Other("maintenance".to_string()));
        assert_eq!(state.status.to_string(), "maintenance");
    }

    #[test]
    fn bet_receipt_tolerates_extra_fields() {
        let json = r#"{"ok":false,"round_id":4,"status":"closed","extra":1}"#;
        let receipt: BetReceipt = serde_json::from_str(json).unwrap();

        assert!(!receipt.ok);
        assert_eq!(receipt.round_id, Some(4));
        assert_eq!(receipt.status, Some(RoundStatus::Closed));
    }

    #[test]
    fn bias_follows_direction_sign() {
        assert_eq!(Bias::from(Direction::Up).as_f64(), 1.0);
        assert_eq!(Bias::from(Direction::Down).as_f64(), -1.0);
        assert_eq!(Bias::default().as_f64(), 0.0);
    }
}
