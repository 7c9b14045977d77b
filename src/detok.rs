//! Marker-aware detokenization.
//!
//! The inverse convention downstream consumers assume: continuation-marked
//! tokens attach to the previous token with no boundary, word-initial-marked
//! tokens start a new word, and everything else is boundary-separated.

use crate::settings::settings;

/// Join a token sequence back into text.
///
/// Tokens prefixed with the continuation marker attach without a boundary;
/// tokens prefixed with the word-initial marker insert a boundary before
/// themselves (marker stripped); all other tokens are space-separated.
pub fn detokenize<S: AsRef<str>>(tokens: &[S]) -> String {
    let markers = &settings().markers;
    let mut out = String::new();
    for token in tokens {
        let token = token.as_ref();
        if let Some(rest) = token.strip_prefix(markers.continuation.as_str()) {
            out.push_str(rest);
        } else if let Some(rest) = token.strip_prefix(markers.word_initial.as_str()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(rest);
        } else {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
        }
    }
    out
}
