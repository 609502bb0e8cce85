//! Text Normalization
//!
//! Canonicalizes provider text before it is handed to the speech synthesizer.

use lazy_static::lazy_static;
use quick_xml::escape::{resolve_html5_entity, unescape_with};
use regex::Regex;
use std::borrow::Cow;
use tracing::debug;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize text for speech output.
///
/// Decodes HTML entities, lower-cases, drops double quotes (they upset the
/// speech renderer), spells out ampersands and collapses whitespace.
/// Idempotent: the output never contains `"` or `&`.
pub fn normalize(text: &str) -> String {
    let decoded = decode_entities(text);
    let lowered = decoded.to_lowercase();
    let unquoted = lowered.replace('"', "");
    let spelled = unquoted.replace('&', "and");

    WHITESPACE.replace_all(&spelled, " ").trim().to_string()
}

/// Decode HTML/SGML character entities.
///
/// Provider text sometimes carries a bare `&` ("AT&T") next to real entities,
/// which makes a strict decode fail. In that case each whitespace-separated
/// word is decoded on its own and undecodable words are kept verbatim.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    match unescape_with(text, resolve_html5_entity) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!("Lenient entity decode for '{}': {}", text, e);
            let words: Vec<Cow<'_, str>> = text
                .split_whitespace()
                .map(|word| unescape_with(word, resolve_html5_entity).unwrap_or(Cow::Borrowed(word)))
                .collect();
            Cow::Owned(words.join(" "))
        }
    }
}
