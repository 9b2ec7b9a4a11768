// コードの合法性判定と極大性チェック

use crate::constants::MIN_CHORD_SPAN;
use crate::domain::graph::{Edge, Graph};

/// 候補コードが既存の長い辺すべてと同時に存在できるか
pub fn coexists(candidate: &Edge, existing: &[Edge]) -> bool {
    existing.iter().all(|e| candidate.coexists_with(e))
}

/// コード集合の全ペアが入れ子でないか
pub fn all_pairs_legal(chords: &[Edge]) -> bool {
    for (i, a) in chords.iter().enumerate() {
        for b in &chords[i + 1..] {
            if !a.coexists_with(b) {
                return false;
            }
        }
    }
    true
}

/// いま追加できる正しいコードをすべて列挙する。
///
/// 候補は j - i >= MIN_CHORD_SPAN のペアのうち、まだグラフに無く、
/// 既存のどの長い辺とも入れ子にならないもの。戻り値は (u, v) の
/// 昇順で決定的。シード付き乱数生成の再現性がこの順序に依存する。
pub fn correct_long_edges(graph: &Graph, long_edges: &[Edge]) -> Vec<Edge> {
    let n = graph.node_count();
    let mut result = Vec::new();
    if n <= MIN_CHORD_SPAN {
        return result;
    }

    for i in 1..=(n - MIN_CHORD_SPAN) {
        for j in (i + MIN_CHORD_SPAN)..=n {
            if graph.has_edge(i, j) {
                continue;
            }
            let candidate = Edge::pair(i, j);
            if !coexists(&candidate, long_edges) {
                continue;
            }
            result.push(candidate);
        }
    }

    result
}

/// これ以上合法なコードを追加できなければ極大
pub fn is_maximal(graph: &Graph, long_edges: &[Edge]) -> bool {
    correct_long_edges(graph, long_edges).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::backbone_graph;

    fn e(a: usize, b: usize) -> Edge {
        Edge::new(a, b).unwrap()
    }

    #[test]
    fn backbone_alone_has_all_candidates() {
        // n=6: スパン4以上のペアは (1,5), (1,6), (2,6) の3つ
        let g = backbone_graph(6).unwrap();
        let candidates = correct_long_edges(&g, &[]);
        assert_eq!(candidates, vec![e(1, 5), e(1, 6), e(2, 6)]);
    }

    #[test]
    fn too_small_graph_has_no_candidates() {
        for n in 0..=4 {
            let g = backbone_graph(n).unwrap();
            assert!(correct_long_edges(&g, &[]).is_empty(), "n={}", n);
        }
    }

    #[test]
    fn present_edges_are_skipped() {
        let mut g = backbone_graph(6).unwrap();
        g.insert(e(1, 5)).unwrap();
        let candidates = correct_long_edges(&g, &[e(1, 5)]);
        assert!(!candidates.contains(&e(1, 5)));
    }

    #[test]
    fn nested_candidates_are_rejected() {
        // (2,6) は (1,7) の真下なので候補から消える
        let mut g = backbone_graph(7).unwrap();
        g.insert(e(1, 7)).unwrap();
        let candidates = correct_long_edges(&g, &[e(1, 7)]);
        assert!(!candidates.contains(&e(2, 6)));
        assert!(candidates.contains(&e(1, 5)));
        assert!(candidates.contains(&e(3, 7)));
    }

    #[test]
    fn maximality_checks_whole_candidate_space() {
        let mut g = backbone_graph(6).unwrap();
        let mut chords = Vec::new();
        assert!(!is_maximal(&g, &chords));

        for c in [e(1, 5), e(1, 6), e(2, 6)] {
            g.insert(c).unwrap();
            chords.push(c);
        }
        assert!(is_maximal(&g, &chords));
    }

    #[test]
    fn all_pairs_legal_detects_nesting() {
        assert!(all_pairs_legal(&[e(1, 5), e(2, 6), e(3, 7)]));
        assert!(!all_pairs_legal(&[e(1, 7), e(2, 6)]));
        assert!(all_pairs_legal(&[]));
    }
}
