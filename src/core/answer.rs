//! Answer Extraction
//!
//! Pulls the canonical answer out of the provider's question-form answer
//! sentence ("What is Paris?" -> "paris").

use crate::core::text_normalizer::normalize;
use crate::dataset::{ClueIndex, GameDataset};
use crate::error::{TriviaError, TriviaResult};

/// Linking phrases, tried in order
const LINKS: &[&str] = &[" is ", " are "];

/// The correct answer sentence for a clue, normalized for speech
pub fn answer_sentence(dataset: &GameDataset, index: ClueIndex) -> TriviaResult<String> {
    let clue = dataset.clue(index)?;
    Ok(normalize(clue.correct_answer(index)?))
}

/// Canonical answer used for grading.
///
/// Fails with `MalformedAnswer` when the sentence has no "is"/"are" link or
/// nothing follows it.
pub fn canonical_answer(dataset: &GameDataset, index: ClueIndex) -> TriviaResult<String> {
    let sentence = answer_sentence(dataset, index)?;
    extract(&sentence).ok_or_else(|| TriviaError::MalformedAnswer {
        index: index.value(),
        answer: sentence.clone(),
    })
}

/// Text after the first " is " (or, failing that, the first " are "),
/// without the trailing question mark
pub fn extract(sentence: &str) -> Option<String> {
    let rest = LINKS
        .iter()
        .find_map(|link| sentence.find(link).map(|at| &sentence[at + link.len()..]))?;

    let answer = rest.trim().trim_end_matches('?').trim();
    if answer.is_empty() {
        None
    } else {
        Some(answer.to_string())
    }
}
