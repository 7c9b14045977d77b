//! Vocabulary entries and the scoring views derived from them.
//!
//! A vocabulary is an ordered list of (token, raw score) pairs supplied by
//! the caller; acquisition and caching live outside this crate. From it the
//! engine derives two parallel read-only views: a probability distribution
//! (softmax over raw scores) for cost-minimizing decoding, and a rank
//! ordering (descending raw score) for rank-based decoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single vocabulary entry: token string plus its raw score.
///
/// Token uniqueness is assumed but not enforced; when a token appears more
/// than once, the first occurrence wins in both derived views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub token: String,
    pub score: f64,
}

impl VocabEntry {
    pub fn new(token: impl Into<String>, score: f64) -> Self {
        Self {
            token: token.into(),
            score,
        }
    }
}

/// Immutable scoring views derived once per tokenization call.
///
/// Rebuilt fresh from whatever vocabulary is passed in; never shared
/// mutable state, so concurrent calls stay independent.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    probs: HashMap<String, f64>,
    ranks: HashMap<String, usize>,
}

impl ScoreTable {
    /// Derive probability and rank tables from an ordered vocabulary.
    ///
    /// Probabilities are a softmax over raw scores (max-subtracted for
    /// numerical stability; identical to `exp(s) / Σ exp(s_j)`). Ranks come
    /// from a stable sort by descending raw score, so score ties keep
    /// vocabulary order.
    pub fn derive(vocab: &[VocabEntry]) -> Self {
        if vocab.is_empty() {
            return Self::default();
        }

        let max_score = vocab.iter().map(|e| e.score).fold(f64::NEG_INFINITY, f64::max);
        let denom: f64 = vocab.iter().map(|e| (e.score - max_score).exp()).sum();

        let mut probs = HashMap::with_capacity(vocab.len());
        for entry in vocab {
            let p = (entry.score - max_score).exp() / denom;
            probs.entry(entry.token.clone()).or_insert(p);
        }

        let mut order: Vec<&VocabEntry> = vocab.iter().collect();
        order.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut ranks = HashMap::with_capacity(vocab.len());
        for (rank, entry) in order.iter().enumerate() {
            ranks.entry(entry.token.clone()).or_insert(rank);
        }

        Self { probs, ranks }
    }

    /// Softmax probability of a token, if present.
    pub fn prob(&self, token: &str) -> Option<f64> {
        self.probs.get(token).copied()
    }

    /// Zero-based rank of a token (lower = higher raw score), if present.
    pub fn rank(&self, token: &str) -> Option<usize> {
        self.ranks.get(token).copied()
    }

    /// Membership test used by the lattice builder.
    pub fn contains(&self, token: &str) -> bool {
        self.probs.contains_key(token)
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }
}
