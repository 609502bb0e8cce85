//! Game Dataset
//!
//! The daily set of twelve clues as delivered by the trivia data provider,
//! plus the linear clue index used to address it.

use crate::error::{TriviaError, TriviaResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Clues per round
pub const CLUES_PER_ROUND: usize = 6;

/// Clues per game (two rounds)
pub const TOTAL_CLUES: usize = CLUES_PER_ROUND * 2;

/// One of the two rounds of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    One,
    Two,
}

impl Round {
    pub fn number(self) -> u8 {
        match self {
            Round::One => 1,
            Round::Two => 2,
        }
    }
}

/// Index of a clue across both rounds (0-11).
///
/// Round and position are always derived from this value; there is no
/// separate round counter anywhere in the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClueIndex(usize);

impl ClueIndex {
    pub const FIRST: ClueIndex = ClueIndex(0);

    /// First clue of round two
    pub const ROUND_TWO_START: ClueIndex = ClueIndex(CLUES_PER_ROUND);

    /// Returns None when `value` is past the last clue
    pub fn new(value: usize) -> Option<Self> {
        (value < TOTAL_CLUES).then_some(Self(value))
    }

    pub fn value(self) -> usize {
        self.0
    }

    pub fn round(self) -> Round {
        if self.0 < CLUES_PER_ROUND {
            Round::One
        } else {
            Round::Two
        }
    }

    /// Position within the round (0-5)
    pub fn position(self) -> usize {
        self.0 % CLUES_PER_ROUND
    }

    /// The following clue, or None after the last one
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// All twelve indices in play order
    pub fn all() -> impl Iterator<Item = ClueIndex> {
        (0..TOTAL_CLUES).map(ClueIndex)
    }
}

impl std::fmt::Display for ClueIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single clue record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    pub category: String,
    pub clue: String,
    pub answers: Vec<String>,
    /// 1-based position of the correct entry in `answers`, as sent by the provider
    #[serde(deserialize_with = "string_or_number")]
    pub correct_answer_index: String,
}

impl Clue {
    /// The correct candidate answer sentence.
    ///
    /// `index` is only used for error reporting.
    pub fn correct_answer(&self, index: ClueIndex) -> TriviaResult<&str> {
        let invalid = || TriviaError::AnswerIndex {
            index: index.value(),
            raw: self.correct_answer_index.clone(),
        };

        let one_based: usize = self
            .correct_answer_index
            .trim()
            .parse()
            .map_err(|_| invalid())?;

        one_based
            .checked_sub(1)
            .and_then(|i| self.answers.get(i))
            .map(String::as_str)
            .ok_or_else(invalid)
    }
}

/// The daily game: two rounds of six clues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDataset {
    pub game_id: String,
    pub date: String,
    #[serde(rename = "clues_round_1")]
    pub round_one_clues: Vec<Clue>,
    #[serde(rename = "clues_round_2")]
    pub round_two_clues: Vec<Clue>,
}

impl GameDataset {
    /// Decode the provider payload.
    ///
    /// The provider answers with an array of games (the first one is today's);
    /// a bare game object is accepted as well.
    pub fn from_json(body: &str) -> TriviaResult<Self> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| TriviaError::DataUnavailable(format!("invalid JSON: {}", e)))?;

        let game = match value {
            serde_json::Value::Array(mut games) => {
                if games.is_empty() {
                    return Err(TriviaError::DataUnavailable(
                        "provider returned no games".to_string(),
                    ));
                }
                games.swap_remove(0)
            }
            other => other,
        };

        let dataset: GameDataset = serde_json::from_value(game)
            .map_err(|e| TriviaError::DataUnavailable(format!("unexpected game shape: {}", e)))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check that both rounds hold exactly six clues
    pub fn validate(&self) -> TriviaResult<()> {
        for (round, clues) in [(1, &self.round_one_clues), (2, &self.round_two_clues)] {
            if clues.len() != CLUES_PER_ROUND {
                return Err(TriviaError::DataUnavailable(format!(
                    "round {} has {} clues, expected {}",
                    round,
                    clues.len(),
                    CLUES_PER_ROUND
                )));
            }
        }
        Ok(())
    }

    pub fn clues(&self, round: Round) -> &[Clue] {
        match round {
            Round::One => &self.round_one_clues,
            Round::Two => &self.round_two_clues,
        }
    }

    /// Look up the clue addressed by a linear index
    pub fn clue(&self, index: ClueIndex) -> TriviaResult<&Clue> {
        self.clues(index.round())
            .get(index.position())
            .ok_or_else(|| {
                TriviaError::DataUnavailable(format!(
                    "round {} has no clue at position {}",
                    index.round().number(),
                    index.position()
                ))
            })
    }
}

/// The provider sends the answer index as text, but tolerate a bare number too
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
