use crate::domain::Direction;

/// What the status line should say. The UI turns this into text.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    /// Nothing received from the round service yet
    Connecting,
    /// First poll of a round we had not seen before
    NewRound { id: u64, timeleft: f64 },
    /// Countdown while the betting window is open
    Betting { id: u64, timeleft: f64 },
    /// Betting has ended, outcome not yet revealed
    Closed { id: u64 },
    Settled { id: u64, outcome: Option<Direction> },
    /// A status this widget does not know, shown verbatim
    Other(String),
    /// Any failed request
    CommunicationError,
    BetAccepted(Direction),
    BetRejected,
}

/// Result of applying one round-state poll to the view state.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundUpdate {
    /// True when the poll carried a round id different from the last one
    pub new_round: bool,
    pub status: StatusLine,
}
