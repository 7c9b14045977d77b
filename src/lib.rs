//! Lattice-based subword segmentation engine.
//!
//! Pure inference-time segmentation of text against a static scored
//! vocabulary: a candidate lattice is built over character offsets, then
//! decoded greedily or by minimum-cost dynamic programming, optionally
//! emitting a replayable trace of every decision.

pub mod detok;
pub mod normalize;
pub mod segmenter;
pub mod settings;
pub mod vocab;

pub use segmenter::{
    tokenize, tokenize_with_trace, Algorithm, Edge, InspectionFrame, Lattice, TokenizeResult,
    TracedTokenizeResult,
};
pub use vocab::VocabEntry;
