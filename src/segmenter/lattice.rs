use serde::Serialize;
use tracing::{debug, debug_span};

use crate::settings::settings;
use crate::vocab::ScoreTable;

use super::algorithm::Algorithm;

/// A candidate token match in the segmentation lattice.
///
/// Nodes are implicit character offsets `0..=char_count`; an edge spans
/// `[from, to)` over the input. `label` is the matched vocabulary token
/// (possibly continuation-marked), or the raw character for fallback edges.
/// Edge identity is `(from, to, label)`; `score` is algorithm-dependent and
/// not part of identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Start position (char index, inclusive)
    pub from: usize,
    /// End position (char index, exclusive)
    pub to: usize,
    /// Matched token string
    pub label: String,
    /// Algorithm-dependent cost: `-ln(prob)`, rank, or span length
    pub score: f64,
}

impl Edge {
    /// Span width in characters.
    pub fn span(&self) -> usize {
        self.to - self.from
    }
}

/// The lattice: all candidate segmentations of an input string.
///
/// Rebuilt fresh on every tokenization call; never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Lattice {
    /// The (possibly normalized) input text
    pub input: String,
    /// All edges in the lattice
    pub edges: Vec<Edge>,
    /// edges_by_start[i] = indices of edges that start at position i
    pub edges_by_start: Vec<Vec<usize>>,
    /// Number of characters in input
    pub char_count: usize,
}

impl Lattice {
    /// Clone out the edges for a path of edge ids, preserving order.
    pub fn resolve_path(&self, path: &[usize]) -> Vec<Edge> {
        path.iter().map(|&idx| self.edges[idx].clone()).collect()
    }

    /// Token labels along a path of edge ids.
    pub fn path_labels(&self, path: &[usize]) -> Vec<String> {
        path.iter().map(|&idx| self.edges[idx].label.clone()).collect()
    }
}

/// Build a lattice from the input text using vocabulary lookups.
///
/// At each start position, every span of 1..=`max_token_len` characters is
/// tested against the vocabulary. When the algorithm matches with a
/// continuation marker, a marked entry (`"##" + piece`) is preferred over a
/// bare match for non-initial positions. Positions where nothing matches get
/// a single-character fallback edge at a fixed high cost, which guarantees
/// every position has an outgoing edge and the sink stays reachable.
pub fn build_lattice(text: &str, algorithm: Algorithm, tables: &ScoreTable) -> Lattice {
    let char_count = text.chars().count();
    let _span = debug_span!("build_lattice", char_count).entered();
    // Pre-compute byte offsets for each char position so we can slice
    // the original &str directly instead of allocating a String per span.
    let byte_offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let byte_at = |pos: usize| byte_offsets.get(pos).copied().unwrap_or(text.len());

    let max_token_len = settings().lattice.max_token_len;
    let continuation = settings().markers.continuation.as_str();

    let mut edges = Vec::new();
    let mut edges_by_start: Vec<Vec<usize>> = vec![Vec::new(); char_count];

    for start in 0..char_count {
        let mut matched_any = false;

        let span_limit = max_token_len.min(char_count - start);
        for len in 1..=span_limit {
            let piece = &text[byte_at(start)..byte_at(start + len)];

            let label = if algorithm.uses_continuation_marker() && start > 0 {
                let marked = format!("{continuation}{piece}");
                if tables.contains(&marked) {
                    Some(marked)
                } else if tables.contains(piece) {
                    Some(piece.to_string())
                } else {
                    None
                }
            } else if tables.contains(piece) {
                Some(piece.to_string())
            } else {
                None
            };

            if let Some(label) = label {
                let score = algorithm.edge_score(tables, &label, len);
                let idx = edges.len();
                edges.push(Edge {
                    from: start,
                    to: start + len,
                    label,
                    score,
                });
                edges_by_start[start].push(idx);
                matched_any = true;
            }
        }

        // Exactly one 1-char fallback edge when no vocabulary token matches
        // at this position, so a complete walk to the sink always exists.
        if !matched_any {
            let ch = text[byte_at(start)..byte_at(start + 1)].to_string();
            let idx = edges.len();
            edges.push(Edge {
                from: start,
                to: start + 1,
                label: ch,
                score: settings().lattice.fallback_cost,
            });
            edges_by_start[start].push(idx);
        }
    }

    debug!(edge_count = edges.len());
    Lattice {
        input: text.to_string(),
        edges,
        edges_by_start,
        char_count,
    }
}
