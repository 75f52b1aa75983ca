//! config/demo.rs Offline demo round feed.
//!
//! Mirrors the timing of the real round service closely enough that the
//! widget behaves the same with `--demo` as it does against a backend.

pub struct DemoConfig {
    /// Length of the betting phase in seconds (reported as `duration`)
    pub round_duration_sec: u64,
    /// Time between `closed` and `settled`
    pub reveal_delay_sec: u64,
}

pub const DEMO: DemoConfig = DemoConfig {
    round_duration_sec: 30,
    reveal_delay_sec: 5,
};
