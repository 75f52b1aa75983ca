use anyhow::Result;
use poll_promise::Promise;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ROUNDS;
use crate::data::rounds_api::{RoundsApi, spawn_request};
use crate::domain::RoundState;
use crate::utils::app_time::AppInstant;

/// Fixed-delay poll loop over a `RoundsApi`.
///
/// Driven from the frame loop: `poll` never blocks. At most one request is in
/// flight; the next one starts `interval` after the previous one completed,
/// whether it succeeded or not.
pub struct RoundPoller {
    api: Arc<dyn RoundsApi>,
    interval: Duration,
    in_flight: Option<Promise<Result<RoundState>>>,
    /// `None` means poll on the next call
    next_poll_at: Option<AppInstant>,
}

impl RoundPoller {
    pub fn new(api: Arc<dyn RoundsApi>) -> Self {
        Self::with_interval(api, Duration::from_millis(ROUNDS.poll_interval_ms))
    }

    pub fn with_interval(api: Arc<dyn RoundsApi>, interval: Duration) -> Self {
        Self {
            api,
            interval,
            in_flight: None,
            next_poll_at: None,
        }
    }

    /// Returns a finished poll if one completed since the last call, and
    /// starts the next request once it is due.
    pub fn poll(&mut self, now: AppInstant) -> Option<Result<RoundState>> {
        if let Some(promise) = self.in_flight.take() {
            match promise.try_take() {
                Ok(result) => {
                    self.next_poll_at = Some(now + self.interval);
                    return Some(result);
                }
                Err(pending) => {
                    self.in_flight = Some(pending);
                    return None;
                }
            }
        }

        if self.next_poll_at.is_none_or(|due| now >= due) {
            let api = Arc::clone(&self.api);
            self.in_flight = Some(spawn_request(async move { api.fetch_state().await }));
        }
        None
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn next_poll_at(&self) -> Option<AppInstant> {
        self.next_poll_at
    }

    pub fn api(&self) -> &Arc<dyn RoundsApi> {
        &self.api
    }
}
