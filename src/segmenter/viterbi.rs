use tracing::{debug, debug_span};

use super::lattice::Lattice;
use super::trace::{FrameSink, InspectionFrame};

/// Minimum-cost decoder: single-pass shortest path on the lattice DAG.
///
/// Node offsets are already in topological order, so one forward relaxation
/// sweep in increasing position order is exact with no priority queue. The cost
/// table is indexed by node (character offset), `INFINITY` until reached;
/// each improvement records the incoming edge as a backpointer. The path is
/// reconstructed backwards from the sink and reversed.
pub(crate) fn decode(lattice: &Lattice, sink: &mut dyn FrameSink) -> Vec<usize> {
    let char_count = lattice.char_count;
    let _span = debug_span!("viterbi_decode", char_count).entered();
    if char_count == 0 {
        return Vec::new();
    }

    let mut best = vec![f64::INFINITY; char_count + 1];
    best[0] = 0.0;
    let mut back: Vec<Option<usize>> = vec![None; char_count + 1];

    for pos in 0..char_count {
        if !best[pos].is_finite() {
            continue;
        }
        if sink.is_recording() {
            sink.emit(InspectionFrame::Consideration {
                position: pos,
                candidates: lattice.resolve_path(&lattice.edges_by_start[pos]),
                path: lattice.resolve_path(&best_path_to(lattice, &back, pos)),
                costs: Some(best.clone()),
            });
        }

        for &idx in &lattice.edges_by_start[pos] {
            let edge = &lattice.edges[idx];
            let candidate = best[pos] + edge.score;
            if candidate < best[edge.to] {
                best[edge.to] = candidate;
                back[edge.to] = Some(idx);
                if sink.is_recording() {
                    sink.emit(InspectionFrame::Resolution {
                        chosen: edge.clone(),
                        path: lattice.resolve_path(&best_path_to(lattice, &back, edge.to)),
                        costs: Some(best.clone()),
                    });
                }
            }
        }
    }

    if !best[char_count].is_finite() {
        debug!("sink unreachable, returning empty path");
        return Vec::new();
    }

    // Backward reconstruction, then reverse into walk order.
    let mut path: Vec<usize> = Vec::new();
    let mut pos = char_count;
    while pos > 0 {
        let Some(idx) = back[pos] else {
            debug!(position = pos, "missing backpointer, returning empty path");
            return Vec::new();
        };
        path.push(idx);
        if sink.is_recording() {
            sink.emit(InspectionFrame::Backtrack {
                edge: lattice.edges[idx].clone(),
                path: lattice.resolve_path(&path),
            });
        }
        pos = lattice.edges[idx].from;
    }
    path.reverse();

    debug!(path_len = path.len(), total_cost = best[char_count]);
    path
}

/// Best-known path from node 0 to `pos`, following recorded backpointers.
fn best_path_to(lattice: &Lattice, back: &[Option<usize>], mut pos: usize) -> Vec<usize> {
    let mut ids = Vec::new();
    while pos > 0 {
        match back[pos] {
            Some(idx) => {
                ids.push(idx);
                pos = lattice.edges[idx].from;
            }
            None => break,
        }
    }
    ids.reverse();
    ids
}
