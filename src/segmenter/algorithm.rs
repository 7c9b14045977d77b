use serde::{Deserialize, Serialize};

use crate::settings::settings;
use crate::vocab::ScoreTable;

use super::lattice::Lattice;
use super::trace::FrameSink;
use super::{greedy, viterbi};

/// The segmentation strategy: how candidate edges are scored and how a path
/// is selected from the lattice.
///
/// Each variant keeps its edge-cost policy and its decoding policy together
/// here, so adding or changing a strategy touches a single place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Probabilistic: edges cost `-ln(prob)` and the minimum-cost path is
    /// selected by dynamic programming.
    Unigram,
    /// Rank-based: edges carry the token's frequency rank; decoding is
    /// greedy longest-match.
    Bpe,
    /// Continuation-marked longest-match: mid-word pieces prefer their
    /// `##`-marked vocabulary form; decoding is greedy longest-match and the
    /// edge score (span length) is informational only.
    WordPiece,
}

impl Algorithm {
    /// Whether lattice matching should prefer continuation-marked entries
    /// for non-initial positions.
    pub(crate) fn uses_continuation_marker(self) -> bool {
        matches!(self, Algorithm::WordPiece)
    }

    /// Score for a matched edge. Tokens missing from the relevant table are
    /// resolved via the documented fallback constants, never an error.
    pub(crate) fn edge_score(self, tables: &ScoreTable, label: &str, span_chars: usize) -> f64 {
        let scoring = &settings().scoring;
        match self {
            Algorithm::Unigram => {
                let p = tables.prob(label).unwrap_or(scoring.floor_probability);
                -p.ln()
            }
            Algorithm::Bpe => tables
                .rank(label)
                .unwrap_or(scoring.unknown_rank) as f64,
            Algorithm::WordPiece => span_chars as f64,
        }
    }

    /// Select a path through the lattice, emitting inspection frames into
    /// `sink`. Returns edge ids in walk order.
    pub(crate) fn decode(self, lattice: &Lattice, sink: &mut dyn FrameSink) -> Vec<usize> {
        match self {
            Algorithm::Unigram => viterbi::decode(lattice, sink),
            Algorithm::Bpe | Algorithm::WordPiece => greedy::decode(lattice, sink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::VocabEntry;

    fn tables() -> ScoreTable {
        ScoreTable::derive(&[
            VocabEntry::new("the", 5.0),
            VocabEntry::new("he", 3.0),
        ])
    }

    #[test]
    fn test_unigram_score_is_negative_log_prob() {
        let tables = tables();
        let score = Algorithm::Unigram.edge_score(&tables, "the", 3);
        let expected = -tables.prob("the").unwrap().ln();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unigram_unknown_token_uses_floor() {
        let score = Algorithm::Unigram.edge_score(&tables(), "zzz", 3);
        let expected = -(1e-4f64).ln();
        assert!((score - expected).abs() < 1e-12);
        assert!(score.is_finite());
    }

    #[test]
    fn test_bpe_score_is_rank() {
        let tables = tables();
        assert_eq!(Algorithm::Bpe.edge_score(&tables, "the", 3), 0.0);
        assert_eq!(Algorithm::Bpe.edge_score(&tables, "he", 2), 1.0);
    }

    #[test]
    fn test_bpe_unknown_token_uses_sentinel() {
        assert_eq!(Algorithm::Bpe.edge_score(&tables(), "zzz", 3), 999.0);
    }

    #[test]
    fn test_wordpiece_score_is_span_length() {
        assert_eq!(Algorithm::WordPiece.edge_score(&tables(), "##he", 2), 2.0);
    }

    #[test]
    fn test_only_wordpiece_uses_continuation_marker() {
        assert!(Algorithm::WordPiece.uses_continuation_marker());
        assert!(!Algorithm::Unigram.uses_continuation_marker());
        assert!(!Algorithm::Bpe.uses_continuation_marker());
    }
}
