//! Round-state service configuration.

/// HTTP endpoints exposed by the external round service.
pub struct RoundEndpoints {
    pub state_path: &'static str,
    pub bet_path: &'static str,
}

/// The Master Rounds Configuration
pub struct RoundsConfig {
    pub endpoints: RoundEndpoints,
    /// Base URL used by native builds when `--api-base` is not supplied.
    /// WASM builds use page-relative URLs instead.
    pub default_base_url: &'static str,
    /// Fixed delay between the end of one poll and the start of the next
    pub poll_interval_ms: u64,
    /// Per-request timeout (native client only)
    pub request_timeout_ms: u64,
    /// Elapsed round time after which the right half of the graph is covered
    pub cover_at_sec: f64,
}

pub const ROUNDS: RoundsConfig = RoundsConfig {
    endpoints: RoundEndpoints {
        state_path: "/api/rounds/state",
        bet_path: "/api/rounds/bet",
    },
    default_base_url: "http://127.0.0.1:8000",
    poll_interval_ms: 1_000,
    request_timeout_ms: 5_000,
    cover_at_sec: 15.0,
};
