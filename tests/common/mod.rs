#![allow(dead_code)]

pub mod mock_source;
pub mod mock_tts;

use triviatalk::dataset::{Clue, GameDataset, CLUES_PER_ROUND};

/// Build a clue whose correct answer is "What is {answer}?"
pub fn clue(category: &str, text: &str, answer: &str) -> Clue {
    Clue {
        category: category.to_string(),
        clue: text.to_string(),
        answers: vec![
            "What is a red herring?".to_string(),
            format!("What is {}?", answer),
            "What is another decoy?".to_string(),
        ],
        correct_answer_index: "2".to_string(),
    }
}

/// The answer to clue `i` (0-11) in `sample_dataset`
pub fn answer_for(i: usize) -> String {
    format!("answer number {}", i)
}

/// A full game where clue `i` is answered by `answer_for(i)`
pub fn sample_dataset() -> GameDataset {
    let round = |offset: usize| {
        (0..CLUES_PER_ROUND)
            .map(|p| {
                let i = offset + p;
                clue(
                    &format!("Category &amp; {}", i),
                    &format!("\"Clue\" {}", i),
                    &answer_for(i),
                )
            })
            .collect()
    };

    GameDataset {
        game_id: "6001".to_string(),
        date: "2024-03-15".to_string(),
        round_one_clues: round(0),
        round_two_clues: round(CLUES_PER_ROUND),
    }
}

/// Provider wire JSON for `sample_dataset`
pub fn sample_wire_json() -> String {
    serde_json::to_string(&vec![sample_dataset()]).expect("Failed to serialize dataset")
}
