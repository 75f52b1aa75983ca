// Domain types and value objects
pub mod round;

// Re-export commonly used types
pub use round::{BetReceipt, Bias, Direction, RoundState, RoundStatus};
