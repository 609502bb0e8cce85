//! Clue Narrator
//!
//! Builds the spoken category announcement and clue text for a clue,
//! phrased by its position within the round.

use crate::core::text_normalizer::normalize;
use crate::dataset::{ClueIndex, GameDataset, CLUES_PER_ROUND};
use crate::error::TriviaResult;

/// Prefix announcing a category, chosen by position within the round
pub fn category_prefix(index: ClueIndex) -> &'static str {
    match index.position() {
        0 => "This round's first category is: ",
        p if p == CLUES_PER_ROUND - 1 => "This round's last category is: ",
        1 => "The second category is: ",
        2 => "The third category is: ",
        3 => "The fourth category is: ",
        4 => "The fifth category is: ",
        _ => "The next category is: ",
    }
}

/// Spoken category announcement, e.g. "the third category is: world capitals"
pub fn category_announcement(dataset: &GameDataset, index: ClueIndex) -> TriviaResult<String> {
    let clue = dataset.clue(index)?;
    Ok(normalize(&format!("{}{}", category_prefix(index), clue.category)))
}

/// Spoken clue text
pub fn clue_text(dataset: &GameDataset, index: ClueIndex) -> TriviaResult<String> {
    let clue = dataset.clue(index)?;
    Ok(normalize(&clue.clue))
}

/// Category announcement followed by the clue, normalized as one unit
pub fn full_narration(dataset: &GameDataset, index: ClueIndex) -> TriviaResult<String> {
    let announcement = category_announcement(dataset, index)?;
    let clue = clue_text(dataset, index)?;
    Ok(normalize(&format!("{}: {}", announcement, clue)))
}
