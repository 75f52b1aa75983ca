//! Client side of the external round service.

use anyhow::Result;
use async_trait::async_trait;
use poll_promise::Promise;
use std::future::Future;

use crate::config::ROUNDS;
use crate::domain::{BetReceipt, RoundState};

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, bail};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use anyhow::{anyhow, bail};

/// Anything that can report round state and accept a bet.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RoundsApi: Send + Sync {
    /// Human readable name used in logs
    fn signature(&self) -> &'static str;

    async fn fetch_state(&self) -> Result<RoundState>;

    /// Sends a bet with no body. The service decides what the bet means.
    async fn place_bet(&self) -> Result<BetReceipt>;
}

/// Starts `future` in the background and hands back a promise the frame
/// loop can check without blocking.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_request<T, F>(future: F) -> Promise<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    Promise::spawn_async(future)
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_request<T, F>(future: F) -> Promise<T>
where
    T: Send + 'static,
    F: Future<Output = T> + 'static,
{
    Promise::spawn_local(future)
}

/// HTTP implementation talking to `/api/rounds/*`.
pub struct HttpRoundsApi {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpRoundsApi {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpRoundsApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(ROUNDS.request_timeout_ms))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl HttpRoundsApi {
    /// An empty `base_url` resolves against the page origin.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl RoundsApi for HttpRoundsApi {
    fn signature(&self) -> &'static str {
        "HTTP Round Service"
    }

    async fn fetch_state(&self) -> Result<RoundState> {
        let url = self.url(ROUNDS.endpoints.state_path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("GET {} returned {}", url, status);
        }

        response
            .json::<RoundState>()
            .await
            .with_context(|| format!("Failed to decode round state from {}", url))
    }

    async fn place_bet(&self) -> Result<BetReceipt> {
        let url = self.url(ROUNDS.endpoints.bet_path);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("POST {} returned {}", url, status);
        }

        response
            .json::<BetReceipt>()
            .await
            .with_context(|| format!("Failed to decode bet receipt from {}", url))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl RoundsApi for HttpRoundsApi {
    fn signature(&self) -> &'static str {
        "HTTP Round Service (browser)"
    }

    async fn fetch_state(&self) -> Result<RoundState> {
        use gloo_net::http::Request;

        let url = self.url(ROUNDS.endpoints.state_path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("GET {} failed: {}", url, e))?;

        if !response.ok() {
            bail!("GET {} returned {}", url, response.status());
        }

        response
            .json::<RoundState>()
            .await
            .map_err(|e| anyhow!("Failed to decode round state from {}: {}", url, e))
    }

    async fn place_bet(&self) -> Result<BetReceipt> {
        use gloo_net::http::Request;

        let url = self.url(ROUNDS.endpoints.bet_path);
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| anyhow!("POST {} failed: {}", url, e))?;

        if !response.ok() {
            bail!("POST {} returned {}", url, response.status());
        }

        response
            .json::<BetReceipt>()
            .await
            .map_err(|e| anyhow!("Failed to decode bet receipt from {}: {}", url, e))
    }
}
