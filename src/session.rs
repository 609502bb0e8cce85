//! Game Session
//!
//! Turn-by-turn state machine for one game: two rounds of six clues, a
//! confirmation pause between the rounds, and a running score.

use crate::core::answer::canonical_answer;
use crate::core::narrator::full_narration;
use crate::core::text_normalizer::normalize;
use crate::dataset::{ClueIndex, GameDataset, CLUES_PER_ROUND, TOTAL_CLUES};
use crate::error::TriviaResult;
use crate::response::Turn;
use crate::source::DatasetSource;
use crate::utils::matching::is_correct;
use tracing::{debug, error, info};

/// Standard reprompt while a clue is open
pub const ANSWER_PROMPT: &str =
    "Please answer in the form of a question, for example: what is paris.";

/// Reprompt between the rounds
pub const YES_NO_PROMPT: &str = "Would you like to continue to round two? Please say yes or no.";

/// Reprompt before a game has started
pub const LAUNCH_PROMPT: &str = "Say start to play today's game.";

const ROUND_TWO_INTRO: &str = "Great, here comes round two!";

const HELP_TEXT: &str = "I'll read you a category and a clue. Answer in the form of a question, \
     like: what is paris. Say repeat to hear the clue again, repeat slowly to hear it slower, \
     or stop to end the game.";

const NOT_UNDERSTOOD: &str = "Sorry, I didn't get that.";

const SKIPPED_CLUE: &str =
    "Sorry, I couldn't check the answer to that clue, so it won't count. Let's move on.";

/// Where a session is in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    /// A clue has been read and an answer is expected
    AwaitingAnswer(ClueIndex),
    /// Round one is over; waiting for yes/no on round two
    AwaitingRoundTransition(ClueIndex),
    Ended,
}

/// One player's game.
///
/// Owns its dataset exclusively; nothing is shared between sessions.
#[derive(Debug)]
pub struct GameSession {
    game_name: String,
    dataset: Option<GameDataset>,
    state: GameState,
    score: usize,
    last_narration: Option<String>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new("Jeopardy Fan")
    }
}

impl GameSession {
    pub fn new(game_name: &str) -> Self {
        Self {
            game_name: game_name.to_string(),
            dataset: None,
            state: GameState::NotStarted,
            score: 0,
            last_narration: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Index of the open clue (or the next one, between rounds)
    pub fn current_index(&self) -> Option<ClueIndex> {
        match self.state {
            GameState::AwaitingAnswer(i) | GameState::AwaitingRoundTransition(i) => Some(i),
            GameState::NotStarted | GameState::Ended => None,
        }
    }

    pub fn awaiting_round_transition(&self) -> bool {
        matches!(self.state, GameState::AwaitingRoundTransition(_))
    }

    pub fn is_ended(&self) -> bool {
        self.state == GameState::Ended
    }

    /// Fetch a fresh game and read the first clue.
    ///
    /// The previous game is only discarded once the new one has loaded; on
    /// failure the session is left exactly as it was so the user can retry.
    pub async fn start(&mut self, source: &dyn DatasetSource) -> TriviaResult<Turn> {
        let dataset = source.fetch_game_dataset().await?;
        dataset.validate()?;

        let narration = full_narration(&dataset, ClueIndex::FIRST)?;
        info!(
            "🎬 Game {} ({}) started from {} source",
            dataset.game_id,
            dataset.date,
            source.name()
        );

        *self = Self {
            game_name: std::mem::take(&mut self.game_name),
            dataset: Some(dataset),
            state: GameState::AwaitingAnswer(ClueIndex::FIRST),
            score: 0,
            last_narration: Some(narration.clone()),
        };

        Ok(Turn::ask(
            format!(
                "Welcome to {}! Here is today's game. {}",
                self.game_name, narration
            ),
            ANSWER_PROMPT,
        ))
    }

    /// Grade a spoken answer for the open clue and move on.
    ///
    /// Outside `AwaitingAnswer` this is a fallback turn.
    pub fn submit_answer(&mut self, spoken: &str) -> TriviaResult<Turn> {
        let (GameState::AwaitingAnswer(index), Some(dataset)) = (self.state, &self.dataset) else {
            return Ok(self.fallback());
        };

        let spoken = normalize(spoken);
        let (feedback, correct) = match canonical_answer(dataset, index) {
            Ok(answer) if is_correct(&spoken, &answer) => {
                (format!("That's correct! The answer is {}.", answer), true)
            }
            Ok(answer) => (
                format!("Sorry, that's incorrect. The correct answer is {}.", answer),
                false,
            ),
            Err(e) => {
                error!("🚨 Skipping clue {}: {}", index, e);
                (SKIPPED_CLUE.to_string(), false)
            }
        };
        let score = self.score + usize::from(correct);
        debug!(
            "Clue {}: heard '{}', correct={}, score={}",
            index, spoken, correct, score
        );

        let turn = match index.next() {
            Some(next) if next == ClueIndex::ROUND_TWO_START => {
                self.state = GameState::AwaitingRoundTransition(next);
                Turn::ask(
                    format!(
                        "{} That's the end of round one. You have {} out of {} so far. {}",
                        feedback, score, CLUES_PER_ROUND, YES_NO_PROMPT
                    ),
                    YES_NO_PROMPT,
                )
            }
            Some(next) => {
                let narration = full_narration(dataset, next)?;
                self.state = GameState::AwaitingAnswer(next);
                self.last_narration = Some(narration.clone());
                Turn::ask(format!("{} {}", feedback, narration), ANSWER_PROMPT)
            }
            None => {
                self.state = GameState::Ended;
                info!("🏁 Game over, final score {}/{}", score, TOTAL_CLUES);
                Turn::tell(format!(
                    "{} Thank you for playing! You scored {} out of {}. Goodbye!",
                    feedback, score, TOTAL_CLUES
                ))
            }
        };

        self.score = score;
        Ok(turn)
    }

    /// Answer to "continue to round two?"
    ///
    /// Outside `AwaitingRoundTransition` this is a fallback turn.
    pub fn confirm_round_transition(&mut self, accepted: bool) -> TriviaResult<Turn> {
        let (GameState::AwaitingRoundTransition(index), Some(dataset)) =
            (self.state, &self.dataset)
        else {
            return Ok(self.fallback());
        };

        if !accepted {
            self.state = GameState::Ended;
            info!("👋 Round two declined, final score {}", self.score);
            return Ok(Turn::tell(format!(
                "Okay. You scored {} out of {}. Thanks for playing, goodbye!",
                self.score, CLUES_PER_ROUND
            )));
        }

        let narration = full_narration(dataset, index)?;
        self.state = GameState::AwaitingAnswer(index);
        self.last_narration = Some(narration.clone());
        info!("▶️ Round two started, score {}", self.score);

        Ok(Turn::ask(
            format!("{} {}", ROUND_TWO_INTRO, narration),
            ANSWER_PROMPT,
        ))
    }

    /// Say the last clue again; between rounds, the yes/no question
    pub fn repeat_last(&self, emphasis: bool) -> Turn {
        match (self.state, self.last_narration.as_deref()) {
            (GameState::AwaitingRoundTransition(_), _) => Turn::ask(YES_NO_PROMPT, YES_NO_PROMPT),
            (GameState::AwaitingAnswer(_), Some(narration)) => {
                Turn::ask(narration, ANSWER_PROMPT).with_emphasis(emphasis)
            }
            _ => self.fallback(),
        }
    }

    /// How to play, without touching the game
    pub fn help(&self) -> Turn {
        let reprompt = self.reprompt();
        Turn::ask(format!("{} {}", HELP_TEXT, reprompt), reprompt)
    }

    /// Stop immediately, whatever the score or position
    pub fn cancel(&mut self) -> Turn {
        if !self.is_ended() {
            info!("🛑 Game cancelled at {:?}, score {}", self.state, self.score);
        }
        self.state = GameState::Ended;
        Turn::tell(format!("Closing {}", self.game_name))
    }

    /// Unrecognized input: repeat the prompt for the current state
    pub fn fallback(&self) -> Turn {
        if self.is_ended() {
            return Turn::tell(format!("Closing {}", self.game_name));
        }
        let reprompt = self.reprompt();
        Turn::ask(format!("{} {}", NOT_UNDERSTOOD, reprompt), reprompt)
    }

    fn reprompt(&self) -> &'static str {
        match self.state {
            GameState::AwaitingRoundTransition(_) => YES_NO_PROMPT,
            GameState::AwaitingAnswer(_) => ANSWER_PROMPT,
            GameState::NotStarted | GameState::Ended => LAUNCH_PROMPT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Clue;
    use crate::error::TriviaError;
    use async_trait::async_trait;

    struct StaticSource(Option<GameDataset>);

    #[async_trait]
    impl DatasetSource for StaticSource {
        async fn fetch_game_dataset(&self) -> TriviaResult<GameDataset> {
            self.0
                .clone()
                .ok_or_else(|| TriviaError::DataUnavailable("offline".to_string()))
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    fn dataset() -> GameDataset {
        let clues = |round: usize| {
            (0..CLUES_PER_ROUND)
                .map(|i| Clue {
                    category: format!("Category {}-{}", round, i),
                    clue: format!("Clue {}-{}", round, i),
                    answers: vec![
                        "What is nothing?".to_string(),
                        format!("What is answer{}{}?", round, i),
                    ],
                    correct_answer_index: "2".to_string(),
                })
                .collect()
        };
        GameDataset {
            game_id: "1".to_string(),
            date: "2024-01-01".to_string(),
            round_one_clues: clues(1),
            round_two_clues: clues(2),
        }
    }

    async fn started() -> GameSession {
        let mut session = GameSession::default();
        session.start(&StaticSource(Some(dataset()))).await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_start() {
        let mut session = GameSession::default();
        let turn = session.start(&StaticSource(Some(dataset()))).await.unwrap();

        assert_eq!(session.state(), GameState::AwaitingAnswer(ClueIndex::FIRST));
        assert_eq!(session.score(), 0);
        assert!(!session.awaiting_round_transition());
        assert!(turn.speech.starts_with("Welcome to Jeopardy Fan!"));
        assert!(turn
            .speech
            .contains("this round's first category is: category 1-0: clue 1-0"));
        assert_eq!(turn.reprompt.as_deref(), Some(ANSWER_PROMPT));
        assert!(!turn.should_end_session);
    }

    #[tokio::test]
    async fn test_start_failure_stays_not_started() {
        let mut session = GameSession::default();
        let err = session.start(&StaticSource(None)).await.unwrap_err();
        assert!(matches!(err, TriviaError::DataUnavailable(_)));
        assert_eq!(session.state(), GameState::NotStarted);
    }

    #[tokio::test]
    async fn test_restart_discards_previous_game() {
        let mut session = started().await;
        session.submit_answer("what is answer10").unwrap();
        assert_eq!(session.score(), 1);

        session.start(&StaticSource(Some(dataset()))).await.unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), Some(ClueIndex::FIRST));
    }

    #[tokio::test]
    async fn test_failed_restart_keeps_game_in_progress() {
        let mut session = started().await;
        session.submit_answer("what is answer10").unwrap();
        session.submit_answer("what is answer11").unwrap();

        let err = session.start(&StaticSource(None)).await.unwrap_err();
        assert!(matches!(err, TriviaError::DataUnavailable(_)));
        assert_eq!(session.state(), GameState::AwaitingAnswer(ClueIndex::new(2).unwrap()));
        assert_eq!(session.score(), 2);
        assert_eq!(
            session.repeat_last(false).speech,
            "the third category is: category 1-2: clue 1-2"
        );
    }

    #[tokio::test]
    async fn test_correct_and_incorrect_answers() {
        let mut session = started().await;

        let turn = session.submit_answer("What is ANSWER10").unwrap();
        assert!(turn.speech.starts_with("That's correct! The answer is answer10."));
        assert!(turn.speech.contains("the second category is"));
        assert_eq!(session.score(), 1);

        let turn = session.submit_answer("what is london").unwrap();
        assert!(turn.speech.contains("incorrect. The correct answer is answer11."));
        assert_eq!(session.score(), 1);
        assert_eq!(session.current_index(), ClueIndex::new(2));
    }

    #[tokio::test]
    async fn test_round_transition_declined() {
        let mut session = started().await;
        let mut turn = None;
        for i in 0..6 {
            turn = Some(session.submit_answer(&format!("what is answer1{}", i)).unwrap());
        }
        let turn = turn.unwrap();

        assert_eq!(
            session.state(),
            GameState::AwaitingRoundTransition(ClueIndex::ROUND_TWO_START)
        );
        assert_eq!(session.score(), 6);
        assert_eq!(turn.reprompt.as_deref(), Some(YES_NO_PROMPT));
        assert!(turn.speech.contains("You have 6 out of 6 so far."));

        let turn = session.confirm_round_transition(false).unwrap();
        assert!(session.is_ended());
        assert!(turn.should_end_session);
        assert!(turn.reprompt.is_none());
        assert!(!turn.speech.contains("category"));
    }

    #[tokio::test]
    async fn test_answer_between_rounds_is_fallback() {
        let mut session = started().await;
        for _ in 0..6 {
            session.submit_answer("what is wrong").unwrap();
        }
        let turn = session.submit_answer("what is answer20").unwrap();
        assert_eq!(turn.reprompt.as_deref(), Some(YES_NO_PROMPT));
        assert!(session.awaiting_round_transition());
        assert_eq!(session.score(), 0);
    }

    #[tokio::test]
    async fn test_confirm_outside_transition_is_fallback() {
        let mut session = started().await;
        let turn = session.confirm_round_transition(true).unwrap();
        assert_eq!(turn.reprompt.as_deref(), Some(ANSWER_PROMPT));
        assert_eq!(session.current_index(), Some(ClueIndex::FIRST));
    }

    #[tokio::test]
    async fn test_malformed_answer_skips_clue() {
        let mut data = dataset();
        data.round_one_clues[0].answers[1] = "Paris".to_string();
        let mut session = GameSession::default();
        session.start(&StaticSource(Some(data))).await.unwrap();

        let turn = session.submit_answer("what is paris").unwrap();
        assert!(turn.speech.starts_with(SKIPPED_CLUE));
        assert!(!turn.should_end_session);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), ClueIndex::new(1));
    }

    #[tokio::test]
    async fn test_repeat() {
        let mut session = started().await;
        session.submit_answer("what is answer10").unwrap();

        let turn = session.repeat_last(false);
        assert_eq!(
            turn.speech,
            "the second category is: category 1-1: clue 1-1"
        );
        assert!(!turn.emphasis);

        let turn = session.repeat_last(true);
        assert!(turn.emphasis);
        assert_eq!(turn.speech, "the second category is: category 1-1: clue 1-1");
    }

    #[tokio::test]
    async fn test_repeat_between_rounds_asks_yes_no() {
        let mut session = started().await;
        for _ in 0..6 {
            session.submit_answer("what is wrong").unwrap();
        }
        assert_eq!(session.repeat_last(false).speech, YES_NO_PROMPT);
    }

    #[tokio::test]
    async fn test_fallback_keeps_state() {
        let mut session = started().await;
        session.submit_answer("what is answer10").unwrap();

        let turn = session.fallback();
        assert_eq!(turn.reprompt.as_deref(), Some(ANSWER_PROMPT));
        assert_eq!(session.current_index(), ClueIndex::new(1));
        assert_eq!(session.score(), 1);
    }

    #[tokio::test]
    async fn test_cancel_from_any_state() {
        let mut fresh = GameSession::default();
        assert!(fresh.cancel().should_end_session);
        assert!(fresh.is_ended());

        let mut session = started().await;
        session.submit_answer("what is answer10").unwrap();
        let turn = session.cancel();
        assert_eq!(turn.speech, "Closing Jeopardy Fan");
        assert!(turn.should_end_session);
        assert!(session.is_ended());
    }

    #[tokio::test]
    async fn test_ended_accepts_nothing() {
        let mut session = started().await;
        session.cancel();

        assert!(session.submit_answer("what is answer10").unwrap().should_end_session);
        assert!(session.confirm_round_transition(true).unwrap().should_end_session);
        assert!(session.repeat_last(false).should_end_session);
        assert!(session.is_ended());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_help_uses_context_reprompt() {
        let session = GameSession::default();
        assert_eq!(session.help().reprompt.as_deref(), Some(LAUNCH_PROMPT));
    }
}
