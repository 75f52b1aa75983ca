// src/utils/app_time.rs

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Measures wall-clock time between successive frames.
#[derive(Debug, Default)]
pub struct FrameTimer {
    last: Option<AppInstant>,
}

impl FrameTimer {
    /// Seconds since the previous call (0.0 on the first call).
    pub fn tick(&mut self, at: AppInstant) -> f64 {
        let dt = self
            .last
            .map(|prev| at.saturating_duration_since(prev))
            .unwrap_or(Duration::ZERO);
        self.last = Some(at);
        dt.as_secs_f64()
    }
}
