//! Turn Responses
//!
//! The (speech, reprompt, end-session) triple produced by every turn, and the
//! boundary that turns it into the voice platform's response envelope.

use crate::error::{TriviaError, TriviaResult};
use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

/// Output of a single turn.
///
/// `speech` and `reprompt` are plain text; markup is added by the composer.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub speech: String,
    pub reprompt: Option<String>,
    pub should_end_session: bool,
    /// Speak `speech` slowly
    pub emphasis: bool,
}

impl Turn {
    /// Continuing turn: the user is expected to speak again
    pub fn ask(speech: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt: Some(reprompt.into()),
            should_end_session: false,
            emphasis: false,
        }
    }

    /// Final turn: the session ends after speaking
    pub fn tell(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt: None,
            should_end_session: true,
            emphasis: false,
        }
    }

    /// Build from a raw triple; a continuing turn must carry a reprompt
    pub fn new(
        speech: impl Into<String>,
        reprompt: Option<String>,
        should_end_session: bool,
    ) -> TriviaResult<Self> {
        if reprompt.is_none() && !should_end_session {
            return Err(TriviaError::InvalidTurn(
                "continuing turn without reprompt".to_string(),
            ));
        }
        Ok(Self {
            speech: speech.into(),
            reprompt,
            should_end_session,
            emphasis: false,
        })
    }

    /// Mark the speech to be spoken slowly
    pub fn with_emphasis(mut self, emphasis: bool) -> Self {
        self.emphasis = emphasis;
        self
    }
}

/// Spoken output in platform form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
    #[serde(rename = "PlainText")]
    PlainText { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reprompt {
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(rename = "shouldEndSession")]
    pub should_end_session: bool,
}

/// Response envelope handed back to the voice platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformResponse {
    pub version: String,
    pub response: ResponseBody,
}

/// Boundary that renders a turn for the voice platform
pub trait ResponseComposer: Send + Sync {
    fn emit_turn(&self, turn: &Turn) -> TriviaResult<PlatformResponse>;
}

/// Wraps speech in `<speak>` and emits SSML output speech
#[derive(Debug, Default, Clone)]
pub struct SsmlComposer;

impl SsmlComposer {
    /// Escape `text` and wrap it in `<speak>`, slowed down when `slow` is set
    fn speech(text: &str, slow: bool) -> OutputSpeech {
        let escaped = escape(text);
        let ssml = if slow {
            format!("<speak><prosody rate=\"slow\">{}</prosody></speak>", escaped)
        } else {
            format!("<speak>{}</speak>", escaped)
        };
        OutputSpeech::Ssml { ssml }
    }
}

impl ResponseComposer for SsmlComposer {
    fn emit_turn(&self, turn: &Turn) -> TriviaResult<PlatformResponse> {
        // Re-validate: Turn fields are public
        if turn.reprompt.is_none() && !turn.should_end_session {
            return Err(TriviaError::InvalidTurn(
                "continuing turn without reprompt".to_string(),
            ));
        }

        Ok(PlatformResponse {
            version: "1.0".to_string(),
            response: ResponseBody {
                output_speech: Self::speech(&turn.speech, turn.emphasis),
                reprompt: turn.reprompt.as_deref().map(|text| Reprompt {
                    output_speech: Self::speech(text, false),
                }),
                should_end_session: turn.should_end_session,
            },
        })
    }
}
