// 隣接リスト形式の保存と読み込み

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::domain::graph::Graph;

/// グラフを隣接リスト形式で保存する。
///
/// 1行1ノード。先頭がノード番号、続いてその隣接ノード。
/// `#` で始まる行はコメント。孤立ノードも番号だけの行として
/// 必ず書き出す（往復でノード集合が保存される）。
pub fn save_adjlist(graph: &Graph, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("出力を作成できません: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# m_graph n={}", graph.node_count())?;
    for v in graph.nodes() {
        write!(writer, "{}", v)?;
        for u in graph.neighbors(v) {
            write!(writer, " {}", u)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// 隣接リスト形式のファイルからグラフを読み込む。
///
/// ノード数は出現した最大の番号。辺はsetに入れるので、両方向に
/// 書かれていても重複しない。
pub fn load_adjlist(path: &Path) -> Result<Graph> {
    let file = File::open(path)
        .with_context(|| format!("グラフファイルを開けません: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut max_node = 0usize;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("{}行目を読めません", lineno + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut ids = Vec::new();
        for token in line.split_whitespace() {
            let id: usize = token
                .parse()
                .with_context(|| format!("{}行目のトークンが不正: {:?}", lineno + 1, token))?;
            if id == 0 {
                bail!("{}行目: ノード番号は1以上", lineno + 1);
            }
            max_node = max_node.max(id);
            ids.push(id);
        }
        rows.push(ids);
    }

    let mut graph = Graph::new(max_node);
    for ids in &rows {
        let Some((&v, neighbors)) = ids.split_first() else {
            continue;
        };
        for &u in neighbors {
            graph
                .add_edge(v, u)
                .with_context(|| format!("辺 ({}, {}) を追加できません", v, u))?;
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::backbone_graph;
    use std::collections::BTreeSet;

    fn roundtrip(graph: &Graph) -> Graph {
        let dir = std::env::temp_dir();
        let path = dir.join(format!(
            "mgraphs_adjlist_test_{}_{}.adjlist",
            std::process::id(),
            graph.node_count()
        ));
        save_adjlist(graph, &path).unwrap();
        let loaded = load_adjlist(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        loaded
    }

    #[test]
    fn roundtrip_preserves_backbone_graph() {
        let g = backbone_graph(6).unwrap();
        let loaded = roundtrip(&g);
        assert_eq!(loaded.node_count(), g.node_count());
        let a: BTreeSet<_> = g.edges().copied().collect();
        let b: BTreeSet<_> = loaded.edges().copied().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn roundtrip_preserves_isolated_nodes() {
        let g = Graph::new(5);
        let loaded = roundtrip(&g);
        assert_eq!(loaded.node_count(), 5);
        assert_eq!(loaded.edge_count(), 0);
    }

    #[test]
    fn roundtrip_preserves_chords() {
        let mut g = backbone_graph(8).unwrap();
        g.add_edge(1, 5).unwrap();
        g.add_edge(2, 6).unwrap();
        let loaded = roundtrip(&g);
        assert_eq!(loaded, g);
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("mgraphs_adjlist_bad_{}.adjlist", std::process::id()));
        std::fs::write(&path, "1 2 x\n").unwrap();
        assert!(load_adjlist(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_adjlist(Path::new("no_such_graph_file.adjlist")).is_err());
    }
}
