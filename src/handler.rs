//! Turn Handler
//!
//! Routes a recognized intent to the matching session transition and turns
//! errors into something the user can act on.

use crate::error::TriviaError;
use crate::intent::Intent;
use crate::response::Turn;
use crate::session::{GameSession, GameState};
use crate::source::DatasetSource;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Spoken when a turn fails
pub const ERROR_TEXT: &str = "An error occurred, please repeat your request";

pub struct TurnHandler {
    source: Arc<dyn DatasetSource>,
}

impl TurnHandler {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    /// Process one turn for a session.
    ///
    /// A session that has not started (or has ended) is (re)started by any
    /// intent other than cancel. A game in progress is never restarted;
    /// launch requests (and help between rounds) get the fallback prompt.
    pub async fn handle(&self, session: &mut GameSession, intent: Intent) -> Turn {
        debug!("Handling {:?} in {:?}", intent, session.state());

        let result = match (session.state(), intent) {
            (_, Intent::Cancel) => Ok(session.cancel()),
            (GameState::NotStarted | GameState::Ended, _) => {
                session.start(self.source.as_ref()).await
            }
            (_, Intent::Answer(text)) => session.submit_answer(&text),
            (_, Intent::Yes) => session.confirm_round_transition(true),
            (_, Intent::No) => session.confirm_round_transition(false),
            (_, Intent::Repeat { emphasis }) => Ok(session.repeat_last(emphasis)),
            (GameState::AwaitingAnswer(_), Intent::Help) => Ok(session.help()),
            (_, intent @ (Intent::Launch | Intent::Help | Intent::Fallback(_))) => {
                debug!("Out-of-domain in {:?}: {:?}", session.state(), intent);
                Ok(session.fallback())
            }
        };

        result.unwrap_or_else(|e| Self::error_turn(&e))
    }

    fn error_turn(err: &TriviaError) -> Turn {
        match err {
            TriviaError::DataUnavailable(msg) => warn!("⚠️ Game data unavailable: {}", msg),
            e if e.is_data_integrity() => error!("🚨 Bad game data: {}", e),
            other => error!("❌ Turn failed: {}", other),
        }
        Turn::ask(ERROR_TEXT, ERROR_TEXT)
    }
}
