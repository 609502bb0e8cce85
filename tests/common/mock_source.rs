//! Mock Dataset Source for Testing
//!
//! Serves a fixed game, counts fetches and can be told to fail.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use triviatalk::dataset::GameDataset;
use triviatalk::error::{TriviaError, TriviaResult};
use triviatalk::source::DatasetSource;

#[derive(Debug)]
pub struct MockSource {
    pub dataset: GameDataset,
    /// Number of fetches performed
    pub fetches: Arc<AtomicUsize>,
    /// Fetches currently running
    pub in_flight: Arc<AtomicUsize>,
    /// Highest number of fetches seen running at once
    pub max_in_flight: Arc<AtomicUsize>,
    /// Simulate a network failure
    pub should_fail: Arc<AtomicBool>,
    /// Simulated latency per fetch
    pub delay: Duration,
}

impl MockSource {
    pub fn new(dataset: GameDataset) -> Self {
        Self {
            dataset,
            fetches: Arc::new(AtomicUsize::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.should_fail.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl DatasetSource for MockSource {
    async fn fetch_game_dataset(&self) -> TriviaResult<GameDataset> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(TriviaError::DataUnavailable("Mock network failure".to_string()));
        }
        Ok(self.dataset.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
