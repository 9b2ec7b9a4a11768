// Graph型 - ノード集合 {1..=n} と辺集合

use std::collections::BTreeSet;

use anyhow::{anyhow, Result};

use super::edge::Edge;

/// ノード {1..=n} 上の単純無向グラフ。
/// ノード集合は構築時に固定され、辺集合だけが変化する。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    edges: BTreeSet<Edge>,
}

impl Graph {
    /// 辺を持たないグラフを作成
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: BTreeSet::new(),
        }
    }

    /// ノード数
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// 辺数
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// ノード番号のイテレータ（1..=n）
    pub fn nodes(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.node_count
    }

    /// 辺を追加する（端点は正規化される）
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<()> {
        self.insert(Edge::new(a, b)?)
    }

    /// 辺を追加する
    pub fn insert(&mut self, edge: Edge) -> Result<()> {
        if edge.v() > self.node_count {
            return Err(anyhow!(
                "ノードが範囲外: {} (n={})",
                edge,
                self.node_count
            ));
        }
        self.edges.insert(edge);
        Ok(())
    }

    /// 辺を取り除く（存在した場合 true）
    pub fn remove(&mut self, edge: &Edge) -> bool {
        self.edges.remove(edge)
    }

    /// 辺の有無
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        match Edge::new(a, b) {
            Ok(e) => self.edges.contains(&e),
            Err(_) => false,
        }
    }

    /// 辺の有無
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// 辺集合のイテレータ（(u, v) の昇順）
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// ノード v の隣接ノード（昇順）
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        let mut result = Vec::new();
        for e in &self.edges {
            if e.u() == v {
                result.push(e.v());
            } else if e.v() == v {
                result.push(e.u());
            }
        }
        result.sort_unstable();
        result
    }

    /// バックボーンに含まれない長い辺をすべて返す
    pub fn long_edges(&self) -> Vec<Edge> {
        self.edges.iter().filter(|e| e.is_long()).copied().collect()
    }

    /// ノード部分集合が誘導する辺の数
    pub fn induced_edge_count(&self, nodes: &[usize]) -> usize {
        let set: BTreeSet<usize> = nodes.iter().copied().collect();
        self.edges
            .iter()
            .filter(|e| set.contains(&e.u()) && set.contains(&e.v()))
            .count()
    }
}
