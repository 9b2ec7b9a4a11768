// バックボーン構築 - 距離1と距離2の辺

use anyhow::Result;

use super::graph::Graph;

/// 距離1と距離2の辺をすべて追加する。
/// 辺集合はsetなので、二重に呼んでも辺は重複しない。
pub fn add_backbone_edges(graph: &mut Graph) -> Result<()> {
    let n = graph.node_count();
    for i in 1..n {
        graph.add_edge(i, i + 1)?;
        if i + 2 <= n {
            graph.add_edge(i, i + 2)?;
        }
    }
    Ok(())
}

/// バックボーンだけを持つ n ノードのグラフを作成
pub fn backbone_graph(n: usize) -> Result<Graph> {
    let mut graph = Graph::new(n);
    add_backbone_edges(&mut graph)?;
    Ok(graph)
}
