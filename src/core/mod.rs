//! Core speech-text modules
//!
//! Text normalization, clue narration and answer extraction.

pub mod answer;
pub mod narrator;
pub mod text_normalizer;

pub use answer::canonical_answer;
pub use narrator::{category_announcement, clue_text, full_narration};
pub use text_normalizer::normalize;
