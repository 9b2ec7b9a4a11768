// 生成・列挙結果の定義

use serde::{Deserialize, Serialize};

use crate::domain::graph::{Edge, Graph};

/// バックボーンと極大コード集合を持つmグラフ
#[derive(Clone, Debug)]
pub struct MGraph {
    pub graph: Graph,
    pub long_edges: Vec<Edge>,
}

/// 列挙された極大mグラフ1件のレコード
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MGraphRecord {
    /// 1始まりの通し番号（ファイル名にも使う）
    pub index: u64,
    pub node_count: usize,
    pub long_edges: Vec<Edge>,
    /// コード集合の正準ハッシュ
    pub hash: u64,
}

/// 列挙のサマリー
#[derive(Clone, Debug, Default)]
pub struct EnumerationSummary {
    pub emitted: u64,
    pub duplicates: u64,
    pub nodes_visited: u64,
    pub leaves: u64,
    pub elapsed_seconds: f64,
    pub nodes_per_second: f64,
}
