//! Dataset Sources
//!
//! Where the daily game comes from: the provider's HTTP endpoint or a JSON
//! file on disk for offline play.

use crate::config::Config;
use crate::dataset::GameDataset;
use crate::error::{TriviaError, TriviaResult};
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tokio_retry::strategy::FixedInterval;
use tokio_retry::RetryIf;
use tracing::{debug, info, warn};

/// Anything that can hand out the day's game
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and decode the game; failures surface as `DataUnavailable`
    async fn fetch_game_dataset(&self) -> TriviaResult<GameDataset>;

    /// Source name for logs
    fn name(&self) -> &str;
}

/// Fetches the game from the trivia provider over HTTP
#[derive(Clone)]
pub struct HttpDatasetSource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
    retries: usize,
    retry_delay: Duration,
}

impl HttpDatasetSource {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.data_url.clone(),
            timeout: Duration::from_secs(config.fetch_timeout_secs),
            retries: config.fetch_retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        }
    }

    async fn fetch_once(&self) -> TriviaResult<GameDataset> {
        debug!("🌐 GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?;

        let body = response.error_for_status()?.text().await?;
        GameDataset::from_json(&body)
    }
}

/// Transport failures and 5xx responses are worth another attempt; a 4xx or
/// a body that doesn't decode will fail the same way again.
fn is_transient(err: &TriviaError) -> bool {
    match err {
        TriviaError::Http(e) => e.status().map_or(true, |s| s.is_server_error()),
        _ => false,
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch_game_dataset(&self) -> TriviaResult<GameDataset> {
        let strategy = FixedInterval::new(self.retry_delay).take(self.retries);

        let result = RetryIf::spawn(
            strategy,
            || async {
                self.fetch_once().await.map_err(|e| {
                    warn!("⚠️ Game fetch from {} failed: {}", self.url, e);
                    e
                })
            },
            is_transient,
        )
        .await;

        match result {
            Ok(dataset) => {
                info!("📥 Fetched game {} ({})", dataset.game_id, dataset.date);
                Ok(dataset)
            }
            Err(e @ TriviaError::DataUnavailable(_)) => Err(e),
            Err(e) => Err(TriviaError::DataUnavailable(e.to_string())),
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Reads the provider's JSON from a file
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch_game_dataset(&self) -> TriviaResult<GameDataset> {
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            TriviaError::DataUnavailable(format!("cannot read {:?}: {}", self.path, e))
        })?;
        let dataset = GameDataset::from_json(&body)?;
        info!(
            "📂 Loaded game {} ({}) from {:?}",
            dataset.game_id, dataset.date, self.path
        );
        Ok(dataset)
    }

    fn name(&self) -> &str {
        "file"
    }
}
