use tracing::{debug, debug_span};

use super::lattice::Lattice;
use super::trace::{FrameSink, InspectionFrame};

/// Greedy forward decoder: longest-match walk from node 0.
///
/// At each node the outgoing edge with the widest span wins; the comparison
/// is strictly-greater, so span ties resolve to the first-encountered edge
/// (arbitrary but deterministic: lattice insertion order). No lookahead.
/// A dead end stops the walk and returns the partial path.
pub(crate) fn decode(lattice: &Lattice, sink: &mut dyn FrameSink) -> Vec<usize> {
    let _span = debug_span!("greedy_decode", char_count = lattice.char_count).entered();

    let mut path: Vec<usize> = Vec::new();
    let mut pos = 0;
    while pos < lattice.char_count {
        let candidates = &lattice.edges_by_start[pos];
        if sink.is_recording() {
            sink.emit(InspectionFrame::Consideration {
                position: pos,
                candidates: lattice.resolve_path(candidates),
                path: lattice.resolve_path(&path),
                costs: None,
            });
        }

        let mut chosen: Option<usize> = None;
        for &idx in candidates {
            let wider = match chosen {
                Some(best) => lattice.edges[idx].span() > lattice.edges[best].span(),
                None => true,
            };
            if wider {
                chosen = Some(idx);
            }
        }

        let Some(idx) = chosen else {
            debug!(position = pos, "dead end, returning partial path");
            break;
        };

        path.push(idx);
        if sink.is_recording() {
            sink.emit(InspectionFrame::Resolution {
                chosen: lattice.edges[idx].clone(),
                path: lattice.resolve_path(&path),
                costs: None,
            });
        }
        pos = lattice.edges[idx].to;
    }

    debug!(path_len = path.len());
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::algorithm::Algorithm;
    use crate::segmenter::lattice::build_lattice;
    use crate::segmenter::testutil::test_vocab;
    use crate::segmenter::trace::NullSink;
    use crate::vocab::ScoreTable;

    #[test]
    fn test_longest_match_wins() {
        let tables = ScoreTable::derive(&test_vocab());
        let lattice = build_lattice("unhappiness", Algorithm::Bpe, &tables);
        let path = decode(&lattice, &mut NullSink);

        // "unhappi" (7 chars) beats "un" (2 chars) at position 0.
        let labels = lattice.path_labels(&path);
        assert_eq!(labels, vec!["unhappi", "ness"]);
    }

    #[test]
    fn test_tie_break_first_encountered() {
        use crate::segmenter::lattice::Edge;
        // Equal-span edges at one node cannot come out of the builder, so
        // hand-build a lattice; the first-listed edge must win regardless
        // of score.
        let lattice = Lattice {
            input: "ab".to_string(),
            edges: vec![
                Edge {
                    from: 0,
                    to: 1,
                    label: "first".to_string(),
                    score: 5.0,
                },
                Edge {
                    from: 0,
                    to: 1,
                    label: "second".to_string(),
                    score: 1.0,
                },
                Edge {
                    from: 1,
                    to: 2,
                    label: "b".to_string(),
                    score: 1.0,
                },
            ],
            edges_by_start: vec![vec![0, 1], vec![2]],
            char_count: 2,
        };
        let path = decode(&lattice, &mut NullSink);
        assert_eq!(lattice.path_labels(&path), vec!["first", "b"]);
    }

    #[test]
    fn test_walk_covers_full_text() {
        let tables = ScoreTable::derive(&test_vocab());
        let lattice = build_lattice("unhappiness", Algorithm::WordPiece, &tables);
        let path = decode(&lattice, &mut NullSink);

        assert_eq!(lattice.edges[path[0]].from, 0);
        assert_eq!(lattice.edges[*path.last().unwrap()].to, lattice.char_count);
        for pair in path.windows(2) {
            assert_eq!(lattice.edges[pair[0]].to, lattice.edges[pair[1]].from);
        }
    }

    #[test]
    fn test_dead_end_returns_partial_path() {
        use crate::segmenter::lattice::Edge;
        // A node with no outgoing edges stops the walk; the edges committed
        // so far are still returned.
        let lattice = Lattice {
            input: "abc".to_string(),
            edges: vec![Edge {
                from: 0,
                to: 1,
                label: "a".to_string(),
                score: 1.0,
            }],
            edges_by_start: vec![vec![0], Vec::new(), Vec::new()],
            char_count: 3,
        };
        let path = decode(&lattice, &mut NullSink);
        assert_eq!(lattice.path_labels(&path), vec!["a"]);
    }

    #[test]
    fn test_empty_lattice() {
        let lattice = build_lattice("", Algorithm::Bpe, &ScoreTable::derive(&[]));
        assert!(decode(&lattice, &mut NullSink).is_empty());
    }
}
