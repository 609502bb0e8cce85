//! Answer matching
//!
//! Grades a spoken answer against the canonical answer.

/// True when either lower-cased string contains the other.
///
/// Lenient on purpose: "the city of paris" and "paris" both pass for
/// "paris". A very short spoken answer will match almost anything.
/// Callers normalize both sides beforehand; nothing beyond case-folding
/// happens here.
pub fn is_correct(spoken: &str, canonical: &str) -> bool {
    let spoken = spoken.to_lowercase();
    let canonical = canonical.to_lowercase();

    spoken.contains(&canonical) || canonical.contains(&spoken)
}
