//! Utility modules

pub mod matching;

pub use matching::is_correct;
