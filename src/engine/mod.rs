pub mod clock;
pub mod core;
pub mod messages;
pub mod state;

// Re-export key components
pub use clock::{FrameAdvance, StepClock};
pub use core::GraphEngine;
pub use messages::{RoundUpdate, StatusLine};
pub use state::ViewState;
