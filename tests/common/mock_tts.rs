//! Recording TTS engine for tests
//!
//! Keeps every utterance together with the rate it was spoken at, so tests
//! can check what a player would actually hear.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use triviatalk::response::Turn;
use triviatalk::tts::TtsEngine;

/// One spoken utterance
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub slow: bool,
}

#[derive(Debug, Default)]
pub struct RecordingTts {
    heard: Mutex<Vec<Utterance>>,
}

impl RecordingTts {
    /// Speak a turn the way the console driver does
    pub async fn play(&self, turn: &Turn) {
        self.speak(&turn.speech, turn.emphasis)
            .await
            .expect("Recording never fails");
    }

    pub fn heard(&self) -> Vec<Utterance> {
        self.heard.lock().unwrap().clone()
    }

    /// Texts spoken at the slow rate
    pub fn heard_slowly(&self) -> Vec<String> {
        self.heard()
            .into_iter()
            .filter(|u| u.slow)
            .map(|u| u.text)
            .collect()
    }
}

#[async_trait]
impl TtsEngine for RecordingTts {
    async fn speak(&self, text: &str, slow: bool) -> Result<()> {
        self.heard.lock().unwrap().push(Utterance {
            text: text.to_string(),
            slow,
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
