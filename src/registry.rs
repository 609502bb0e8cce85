//! Session Registry
//!
//! Keeps one `GameSession` per voice session id. Turns for the same session
//! are serialized by a per-session async lock held for the whole turn
//! (including the dataset fetch); different sessions run independently.

use crate::error::TriviaResult;
use crate::handler::TurnHandler;
use crate::intent::Intent;
use crate::response::Turn;
use crate::session::GameSession;
use crate::source::DatasetSource;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

type SessionSlot = Arc<tokio::sync::Mutex<GameSession>>;

pub struct SessionRegistry {
    handler: TurnHandler,
    game_name: String,
    sessions: Mutex<HashMap<String, SessionSlot>>,
}

impl SessionRegistry {
    pub fn new(source: Arc<dyn DatasetSource>, game_name: &str) -> Self {
        Self {
            handler: TurnHandler::new(source),
            game_name: game_name.to_string(),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Run one turn for `session_id`, creating the session on first contact.
    ///
    /// The session is dropped once a turn ends it.
    pub async fn handle_turn(&self, session_id: &str, intent: Intent) -> TriviaResult<Turn> {
        let slot = self.slot(session_id)?;
        let mut session = slot.lock().await;

        let turn = self.handler.handle(&mut session, intent).await;

        if turn.should_end_session {
            let mut sessions = self.sessions.lock()?;
            // Only forget the slot we served; a newer one may have replaced it
            if sessions
                .get(session_id)
                .is_some_and(|current| Arc::ptr_eq(current, &slot))
            {
                sessions.remove(session_id);
                info!("🗑️ Session {} closed", session_id);
            }
        }
        Ok(turn)
    }

    /// Forget a session the platform reports as ended
    pub fn end_session(&self, session_id: &str) -> TriviaResult<bool> {
        Ok(self.sessions.lock()?.remove(session_id).is_some())
    }

    pub fn active_sessions(&self) -> TriviaResult<usize> {
        Ok(self.sessions.lock()?.len())
    }

    fn slot(&self, session_id: &str) -> TriviaResult<SessionSlot> {
        let mut sessions = self.sessions.lock()?;
        let slot = sessions.entry(session_id.to_string()).or_insert_with(|| {
            debug!("New session {}", session_id);
            Arc::new(tokio::sync::Mutex::new(GameSession::new(&self.game_name)))
        });
        Ok(slot.clone())
    }
}
