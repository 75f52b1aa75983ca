// Round-state feeds and the poll loop over them
pub mod demo_rounds;
pub mod round_poller;
pub mod rounds_api;

// Re-export commonly used types
pub use demo_rounds::DemoRounds;
pub use round_poller::RoundPoller;
pub use rounds_api::{HttpRoundsApi, RoundsApi, spawn_request};
