//! Replayable inspection frames emitted during decoding.
//!
//! Both decoders run their decision logic once, writing frames through an
//! injected [`FrameSink`]; the traced and untraced entry points differ only
//! in which sink they pass. Frames are append-only, emitted in chronological
//! decision order, and self-contained: they embed cloned [`Edge`] values so
//! a consumer can replay a decode without access to the lattice.

use serde::Serialize;

use super::lattice::Edge;

/// A snapshot of one decoding event.
///
/// `costs` is populated only by the cost-minimizing decoder: a full copy of
/// the per-node cost table at the instant of the event (`INFINITY` marks
/// nodes not yet reached).
#[derive(Debug, Clone, Serialize)]
pub enum InspectionFrame {
    /// Emitted before a decision at a node: all candidate edges visible from
    /// it, plus the partial path accumulated so far.
    Consideration {
        position: usize,
        candidates: Vec<Edge>,
        path: Vec<Edge>,
        costs: Option<Vec<f64>>,
    },
    /// Emitted after a decision: the edge a greedy step committed to, or a
    /// cost-table update that improved a node's best cost.
    Resolution {
        chosen: Edge,
        path: Vec<Edge>,
        costs: Option<Vec<f64>>,
    },
    /// Emitted once per edge visited during backward path reconstruction,
    /// carrying the path accumulated so far in reverse-construction order.
    Backtrack { edge: Edge, path: Vec<Edge> },
}

/// Injectable frame destination shared by both decoders.
///
/// `is_recording` lets the decoders skip frame assembly (edge clones, cost
/// table copies) entirely on the untraced path.
pub(crate) trait FrameSink {
    fn is_recording(&self) -> bool;
    fn emit(&mut self, frame: InspectionFrame);
}

/// Sink for untraced calls; discards nothing because nothing is built.
pub(crate) struct NullSink;

impl FrameSink for NullSink {
    fn is_recording(&self) -> bool {
        false
    }

    fn emit(&mut self, _frame: InspectionFrame) {}
}

/// Sink that appends every frame, in emission order.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub frames: Vec<InspectionFrame>,
}

impl FrameSink for RecordingSink {
    fn is_recording(&self) -> bool {
        true
    }

    fn emit(&mut self, frame: InspectionFrame) {
        self.frames.push(frame);
    }
}

/// Reconstruct the final token list from a frame sequence alone.
///
/// Greedy decodes finish on a `Resolution` frame whose path is the full
/// forward walk; cost-minimizing decodes finish on a `Backtrack` frame whose
/// path is the full walk in reverse-construction order. Replaying the frames
/// in order and keeping the last committed path yields the same tokens the
/// decoder returned.
pub fn replay_tokens(frames: &[InspectionFrame]) -> Vec<String> {
    let mut current: Vec<Edge> = Vec::new();
    for frame in frames {
        match frame {
            InspectionFrame::Resolution { path, .. } => {
                current = path.clone();
            }
            InspectionFrame::Backtrack { path, .. } => {
                current = path.iter().rev().cloned().collect();
            }
            InspectionFrame::Consideration { .. } => {}
        }
    }
    current.into_iter().map(|e| e.label).collect()
}
