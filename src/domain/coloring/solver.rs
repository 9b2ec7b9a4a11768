// 彩色数ソルバー - 部分集合DPによる厳密解

use anyhow::{bail, ensure, Result};

use crate::constants::MAX_COLORING_NODES;
use crate::domain::graph::Graph;

/// 未計算を表す番兵
const UNKNOWN: i8 = -1;

/// グラフの彩色数を厳密に計算する。
///
/// T[w] = 部分集合 w の誘導部分グラフに必要な最小色数、として
/// χ(G) = min_{独立集合 I} 1 + χ(G - I) を全部分集合にわたって
/// メモ化する。時間はおよそ O(3^n)、表は O(2^n)。
/// 部分集合はサイズの昇順に処理する。漸化式が参照するのは常に
/// 自分より小さい部分集合なので、この順序がDPの正しさの要になる。
pub fn chromatic_number(graph: &Graph) -> Result<u32> {
    let n = graph.node_count();
    if n == 0 {
        return Ok(0);
    }
    ensure!(
        n <= MAX_COLORING_NODES,
        "彩色DPはノード数{}まで（指定: {}）",
        MAX_COLORING_NODES,
        n
    );

    let adj = adjacency_masks(graph);
    let full: u32 = (1u32 << n) - 1;

    let mut table = vec![UNKNOWN; 1usize << n];
    table[0] = 0;
    for v in 0..n {
        table[1usize << v] = 1;
    }

    for size in 2..=n {
        // Gosper's hack で同じサイズの部分集合を昇順に辿る
        let mut w: u32 = (1u32 << size) - 1;
        while w <= full {
            table[w as usize] = solve_subset(&table, &adj, w)?;
            w = next_subset_same_popcount(w);
        }
    }

    Ok(table[full as usize] as u32)
}

/// |w| >= 2 の部分集合のDP値を計算する。
///
/// 条件を満たす s は (a) s == w かつ w が独立集合、または
/// (b) s が真部分集合で T[s] == 1（s 自体が独立集合）。
/// 取り除いた残り w \ s の最小値に 1 を足す。
fn solve_subset(table: &[i8], adj: &[u32], w: u32) -> Result<i8> {
    let mut best = i8::MAX;

    let mut s = w;
    loop {
        let qualifies = if s == w {
            is_independent(adj, w)
        } else {
            table[s as usize] == 1
        };
        if qualifies {
            let rest = w & !s;
            let t = table[rest as usize];
            if t == UNKNOWN {
                bail!("彩色DPの処理順が壊れています: T[{:#b}] が未計算", rest);
            }
            if t < best {
                best = t;
            }
        }
        s = (s - 1) & w;
        if s == 0 {
            break;
        }
    }

    // 単点の s は常に T[s] == 1 なので best は必ず確定している
    if best == i8::MAX {
        bail!("彩色DPが部分集合 {:#b} の分解を見つけられませんでした", w);
    }
    Ok(1 + best)
}

/// ビット集合 w の内部に辺がないか
fn is_independent(adj: &[u32], w: u32) -> bool {
    let mut rest = w;
    while rest != 0 {
        let v = rest.trailing_zeros() as usize;
        if adj[v] & w != 0 {
            return false;
        }
        rest &= rest - 1;
    }
    true
}

/// ノード v (1..=n) をビット v-1 に対応させた隣接マスク
fn adjacency_masks(graph: &Graph) -> Vec<u32> {
    let mut adj = vec![0u32; graph.node_count()];
    for e in graph.edges() {
        adj[e.u() - 1] |= 1 << (e.v() - 1);
        adj[e.v() - 1] |= 1 << (e.u() - 1);
    }
    adj
}

/// 同じpopcountを持つ次のビット集合（Gosper's hack）
fn next_subset_same_popcount(w: u32) -> u32 {
    let c = w & w.wrapping_neg();
    let r = w.wrapping_add(c);
    (((w ^ r) >> 2) / c) | r
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_graph(k: usize) -> Graph {
        let mut g = Graph::new(k);
        for a in 1..=k {
            for b in (a + 1)..=k {
                g.add_edge(a, b).unwrap();
            }
        }
        g
    }

    fn cycle_graph(n: usize) -> Graph {
        let mut g = Graph::new(n);
        for v in 1..n {
            g.add_edge(v, v + 1).unwrap();
        }
        g.add_edge(n, 1).unwrap();
        g
    }

    #[test]
    fn empty_graph_needs_zero_colors() {
        assert_eq!(chromatic_number(&Graph::new(0)).unwrap(), 0);
    }

    #[test]
    fn single_node_needs_one_color() {
        assert_eq!(chromatic_number(&Graph::new(1)).unwrap(), 1);
    }

    #[test]
    fn edge_free_graph_needs_one_color() {
        for n in [2, 5, 10] {
            assert_eq!(chromatic_number(&Graph::new(n)).unwrap(), 1, "n={}", n);
        }
    }

    #[test]
    fn complete_graph_needs_k_colors() {
        for k in 2..=7 {
            assert_eq!(chromatic_number(&complete_graph(k)).unwrap(), k as u32);
        }
    }

    #[test]
    fn odd_cycles_need_three_colors() {
        for n in [3, 5, 7, 9] {
            assert_eq!(chromatic_number(&cycle_graph(n)).unwrap(), 3, "n={}", n);
        }
    }

    #[test]
    fn even_cycles_need_two_colors() {
        for n in [4, 6, 8, 10] {
            assert_eq!(chromatic_number(&cycle_graph(n)).unwrap(), 2, "n={}", n);
        }
    }

    #[test]
    fn single_edge_needs_two_colors() {
        let mut g = Graph::new(2);
        g.add_edge(1, 2).unwrap();
        assert_eq!(chromatic_number(&g).unwrap(), 2);
    }

    #[test]
    fn petersen_graph_needs_three_colors() {
        // 外側5角形 1..5、内側5角形 6..10（2つ飛ばし）、スポーク
        let mut g = Graph::new(10);
        for v in 1..=5 {
            g.add_edge(v, v % 5 + 1).unwrap();
            g.add_edge(v, v + 5).unwrap();
            g.add_edge(v + 5, (v + 1) % 5 + 6).unwrap();
        }
        assert_eq!(chromatic_number(&g).unwrap(), 3);
    }

    #[test]
    fn rejects_oversized_graphs() {
        let g = Graph::new(MAX_COLORING_NODES + 1);
        assert!(chromatic_number(&g).is_err());
    }
}
