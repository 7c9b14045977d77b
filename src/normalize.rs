//! Input canonicalization applied before lattice construction.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize raw input text: lower-case, decompose (NFD) and strip
/// combining diacritical marks, then trim outer whitespace.
///
/// Total and idempotent: lower-casing can itself introduce combining marks
/// (e.g. `İ` → `i` + U+0307), which the same pass removes, so a second
/// application is a no-op.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}
