//! Player source backed by an upstream HTTP feed

use std::time::Duration;
use async_trait::async_trait;

use shared::{process_debug, PlayerRecord, ProcessId};
use crate::error::{OptimizerError, OptimizerResult};
use crate::traits::PlayerSource;

/// Upper bound on one feed request
pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(10);

/// GETs a JSON array of player records from a feed URL
#[derive(Debug, Clone)]
pub struct RealHttpPlayerSource {
    url: String,
    client: reqwest::Client,
}

impl RealHttpPlayerSource {
    pub fn new(url: impl Into<String>) -> OptimizerResult<Self> {
        Self::with_timeout(url, DEFAULT_FEED_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> OptimizerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OptimizerError::ConfigurationError {
                field: "feed_client".to_string(),
                value: e.to_string(),
            })?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl PlayerSource for RealHttpPlayerSource {
    async fn fetch_players(&self) -> OptimizerResult<Vec<PlayerRecord>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| OptimizerError::source_unavailable(format!("Feed request to {} failed: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(OptimizerError::source_unavailable(format!(
                "Feed {} answered with status {}",
                self.url,
                response.status()
            )));
        }

        let records: Vec<PlayerRecord> = response
            .json()
            .await
            .map_err(|e| OptimizerError::source_unavailable(format!("Malformed feed response: {}", e)))?;

        process_debug!(ProcessId::current(), "Fetched {} player records from {}", records.len(), self.url);
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("feed {}", self.url)
    }
}
