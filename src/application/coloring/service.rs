// グラフ読み込みと彩色のサービス

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::coloring::chromatic_number;
use crate::domain::graph::Graph;
use crate::infrastructure::storage::load_adjlist;

/// 隣接リスト形式のファイルを読み込み、厳密な彩色数を計算する
pub fn color_graph_file(path: &Path) -> Result<(Graph, u32)> {
    let graph = load_adjlist(path)
        .with_context(|| format!("グラフを読み込めません: {}", path.display()))?;
    let chi = chromatic_number(&graph)?;
    Ok((graph, chi))
}
