//! Intents
//!
//! Recognized user intents and a keyword classifier standing in for the
//! voice platform's language understanding when driving the game from a console.

use tracing::debug;

/// A recognized turn input
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Open the game / start a new one
    Launch,
    /// A spoken answer; carries the answer slot text
    Answer(String),
    Yes,
    No,
    /// Say the last clue again, slowly when `emphasis` is set
    Repeat { emphasis: bool },
    Help,
    /// Cancel or stop
    Cancel,
    /// Out-of-domain utterance; carries the fallback slot text
    Fallback(String),
}

const CANCEL_WORDS: &[&str] = &["stop", "cancel", "quit", "exit", "goodbye", "good bye"];

const YES_WORDS: &[&str] = &["yes", "yeah", "yep", "sure", "ok", "okay", "continue"];

const NO_WORDS: &[&str] = &["no", "nope", "nah", "no thanks", "no thank you"];

const REPEAT_PHRASES: &[&str] = &["repeat", "say that again", "say it again", "again please"];

const EMPHASIS_WORDS: &[&str] = &["slow", "slower", "slowly"];

const LAUNCH_PHRASES: &[&str] = &["start", "new game", "play", "begin", "open"];

/// Leading words of a question-form answer
const QUESTION_WORDS: &[&str] = &["what", "who", "where", "when", "which"];

/// Linking verbs after the question word
const LINKING_WORDS: &[&str] = &["is", "are", "was", "were"];

/// Classify a console utterance into an intent
pub fn classify(utterance: &str) -> Intent {
    let text = utterance.trim().to_lowercase();
    let text = text.trim_end_matches(['.', '!', '?']).trim();

    let intent = if text.is_empty() {
        Intent::Fallback(String::new())
    } else if is_answer(text) {
        Intent::Answer(text.to_string())
    } else if CANCEL_WORDS.contains(&text) {
        Intent::Cancel
    } else if text == "help" || text.starts_with("help ") {
        Intent::Help
    } else if YES_WORDS.contains(&text) {
        Intent::Yes
    } else if NO_WORDS.contains(&text) {
        Intent::No
    } else if REPEAT_PHRASES.iter().any(|p| text.contains(p)) {
        Intent::Repeat {
            emphasis: EMPHASIS_WORDS
                .iter()
                .any(|w| text.split_whitespace().any(|word| word == *w)),
        }
    } else if LAUNCH_PHRASES.iter().any(|p| text.starts_with(p)) {
        Intent::Launch
    } else {
        Intent::Fallback(text.to_string())
    };

    debug!("Classified '{}' as {:?}", utterance, intent);
    intent
}

/// "what is paris", "who were the beatles" ...
fn is_answer(text: &str) -> bool {
    let mut words = text.split_whitespace();
    let (Some(question), Some(link), Some(_)) = (words.next(), words.next(), words.next()) else {
        return false;
    };
    QUESTION_WORDS.contains(&question) && LINKING_WORDS.contains(&link)
}

/// The answer slot value for an intent, if it carries one
pub fn extract_spoken_answer(intent: &Intent) -> Option<&str> {
    match intent {
        Intent::Answer(text) | Intent::Fallback(text) => Some(text),
        _ => None,
    }
}
