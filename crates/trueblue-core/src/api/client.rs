//! API client for The Blue Alliance read API.
//!
//! This module provides the `ApiClient` struct and the `ResourceSource`
//! trait that the resource cache falls back to on a miss.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Default host for the v1 read API.
pub const DEFAULT_API_BASE_URL: &str = "http://www.thebluealliance.com";

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Fetch boundary
// ============================================================================

/// Anything that can produce the raw text of the four remote resources.
///
/// Implementations return the body exactly as received; decoding happens
/// after the text has been written to the cache.
#[allow(async_fn_in_trait)]
pub trait ResourceSource {
    /// Index of every event in a season.
    async fn event_index(&self, year: i32) -> Result<String>;

    /// Full record for one event, including its roster and match keys.
    async fn event_detail(&self, event_key: &str) -> Result<String>;

    /// Detail records for a batch of teams, addressed by team key (`frc254`).
    async fn team_details(&self, team_keys: &[String]) -> Result<String>;

    /// Detail record for one match, wrapped in a one-element list.
    async fn match_detail(&self, match_key: &str) -> Result<String>;
}

/// API client for The Blue Alliance.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the given host
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn event_index_url(&self, year: i32) -> String {
        format!("{}/api/v1/events/list?year={}", self.base_url, year)
    }

    fn event_detail_url(&self, event_key: &str) -> String {
        format!("{}/api/v1/event/details?event={}", self.base_url, event_key)
    }

    fn team_details_url(&self, team_keys: &[String]) -> String {
        format!("{}/api/v1/teams/show?teams={}", self.base_url, team_keys.join(","))
    }

    fn match_detail_url(&self, match_key: &str) -> String {
        format!("{}/api/v1/match/details?match={}", self.base_url, match_key)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!(url = url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        response
            .text()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to read response body from {}", url))
    }
}

impl ResourceSource for ApiClient {
    async fn event_index(&self, year: i32) -> Result<String> {
        self.get_text(&self.event_index_url(year)).await
    }

    async fn event_detail(&self, event_key: &str) -> Result<String> {
        self.get_text(&self.event_detail_url(event_key)).await
    }

    async fn team_details(&self, team_keys: &[String]) -> Result<String> {
        self.get_text(&self.team_details_url(team_keys)).await
    }

    async fn match_detail(&self, match_key: &str) -> Result<String> {
        self.get_text(&self.match_detail_url(match_key)).await
    }
}
