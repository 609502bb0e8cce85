//! TriviaTalk Library
//!
//! Core modules for the TriviaTalk daily trivia voice game.

pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod handler;
pub mod intent;
pub mod registry;
pub mod response;
pub mod session;
pub mod source;
pub mod tts;
pub mod utils;
