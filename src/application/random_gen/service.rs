// ランダム極大mグラフ生成

use anyhow::Result;
use rand::Rng;

use crate::domain::chord::correct_long_edges;
use crate::domain::graph::backbone_graph;
use crate::domain::search::{MGraph, NodeCount};

/// バックボーンに合法なコードを尽きるまでランダムに足す。
///
/// コードを足すたびに候補は単調に減る（追加は新しい入れ子衝突を
/// 生むだけで、既存の衝突を解消することはない）ので必ず停止する。
/// 得られる分布は挿入順に偏るが、ランダムサンプル用途では
/// それで構わない。
pub fn generate_random_m_graph<R: Rng>(nodes: NodeCount, rng: &mut R) -> Result<MGraph> {
    let mut graph = backbone_graph(nodes.get())?;
    let mut long_edges = Vec::new();

    loop {
        let candidates = correct_long_edges(&graph, &long_edges);
        if candidates.is_empty() {
            break;
        }
        let pick = candidates[rng.gen_range(0..candidates.len())];
        graph.insert(pick)?;
        long_edges.push(pick);
    }

    Ok(MGraph { graph, long_edges })
}
