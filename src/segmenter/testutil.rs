#![cfg(test)]

use crate::vocab::VocabEntry;

/// Shared test vocabulary for segmenter tests.
///
/// Raw scores are log-frequency-like: higher = more frequent. Chosen so the
/// minimum-cost segmentation of "unhappiness" is ["un", "happi", "ness"]
/// while greedy longest-match picks "unhappi" first; several tests rely on
/// the two strategies disagreeing.
pub fn test_vocab() -> Vec<VocabEntry> {
    vec![
        VocabEntry::new("un", 5.0),
        VocabEntry::new("happi", 4.0),
        VocabEntry::new("ness", 4.5),
        VocabEntry::new("unhappi", 2.0),
        VocabEntry::new("happiness", 1.5),
        VocabEntry::new("ha", 3.0),
        VocabEntry::new("i", 2.5),
        VocabEntry::new("n", 2.0),
        VocabEntry::new("e", 2.2),
        VocabEntry::new("s", 2.8),
        VocabEntry::new("p", 1.8),
        VocabEntry::new("##happi", 3.5),
        VocabEntry::new("##ness", 3.8),
        VocabEntry::new("▁un", 3.0),
    ]
}
