//! Subword segmentation via lattice construction and decoding.
//!
//! Builds a character-offset lattice of candidate vocabulary matches over
//! the input, then selects one path with the strategy the [`Algorithm`]
//! names: greedy longest-match or minimum-cost dynamic programming. The
//! traced entry point additionally captures every decision as an
//! [`InspectionFrame`] for step-by-step external playback.

mod algorithm;
mod greedy;
mod lattice;
mod testutil;
mod trace;
mod viterbi;

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::vocab::{ScoreTable, VocabEntry};

pub use algorithm::Algorithm;
pub use lattice::{build_lattice, Edge, Lattice};
pub use trace::{replay_tokens, InspectionFrame};

use trace::{FrameSink, NullSink, RecordingSink};

/// Output of a single tokenization call.
///
/// `selected_path` holds edge ids (indices into `lattice.edges`) forming a
/// connected walk from node 0 to the sink; `tokens` are the labels along it.
#[derive(Debug, Clone, Serialize)]
pub struct TokenizeResult {
    pub lattice: Lattice,
    pub selected_path: Vec<usize>,
    pub tokens: Vec<String>,
}

/// A tokenization result together with its inspection-frame trace.
#[derive(Debug, Clone, Serialize)]
pub struct TracedTokenizeResult {
    pub result: TokenizeResult,
    pub frames: Vec<InspectionFrame>,
}

/// Segment `text` against `vocab` with the given algorithm.
///
/// Pure function of its arguments: the lattice and scoring tables are built
/// fresh per call and nothing is shared across invocations. Empty text
/// yields an empty path and token list; an empty vocabulary degrades to
/// character-level fallback segmentation. Never fails.
pub fn tokenize(
    text: &str,
    algorithm: Algorithm,
    normalize: bool,
    vocab: &[VocabEntry],
) -> TokenizeResult {
    run(text, algorithm, normalize, vocab, &mut NullSink)
}

/// Like [`tokenize`], additionally emitting the ordered inspection frames
/// the decoder produced. Both entry points run the identical decision
/// logic; only the frame sink differs.
pub fn tokenize_with_trace(
    text: &str,
    algorithm: Algorithm,
    normalize: bool,
    vocab: &[VocabEntry],
) -> TracedTokenizeResult {
    let mut sink = RecordingSink::default();
    let result = run(text, algorithm, normalize, vocab, &mut sink);
    debug!(frame_count = sink.frames.len());
    TracedTokenizeResult {
        result,
        frames: sink.frames,
    }
}

fn run(
    text: &str,
    algorithm: Algorithm,
    normalize: bool,
    vocab: &[VocabEntry],
    sink: &mut dyn FrameSink,
) -> TokenizeResult {
    let _span = debug_span!("tokenize", ?algorithm, normalize).entered();

    let text = if normalize {
        crate::normalize::normalize(text)
    } else {
        text.to_string()
    };

    let tables = ScoreTable::derive(vocab);
    let lattice = build_lattice(&text, algorithm, &tables);
    let selected_path = algorithm.decode(&lattice, sink);
    let tokens = lattice.path_labels(&selected_path);

    debug!(
        edge_count = lattice.edges.len(),
        token_count = tokens.len()
    );
    TokenizeResult {
        lattice,
        selected_path,
        tokens,
    }
}
