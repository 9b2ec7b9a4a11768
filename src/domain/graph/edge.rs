// Edge型 - 正規化された無向辺

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// 無向辺を表すValue Object（常に u < v に正規化）
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    u: usize,
    v: usize,
}

impl Edge {
    /// 端点を正規化して辺を作成
    pub fn new(a: usize, b: usize) -> Result<Self> {
        if a == b {
            return Err(anyhow!("自己ループは作れません: ({}, {})", a, b));
        }
        if a == 0 || b == 0 {
            return Err(anyhow!("ノード番号は1以上: ({}, {})", a, b));
        }
        let (u, v) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { u, v })
    }

    /// ループ境界で u < v が保証されている箇所用
    pub(crate) fn pair(u: usize, v: usize) -> Self {
        debug_assert!(u >= 1 && u < v);
        Self { u, v }
    }

    /// 小さい方の端点
    pub fn u(&self) -> usize {
        self.u
    }

    /// 大きい方の端点
    pub fn v(&self) -> usize {
        self.v
    }

    /// 両端点の距離
    pub fn span(&self) -> usize {
        self.v - self.u
    }

    /// バックボーンに含まれない長い辺かどうか
    pub fn is_long(&self) -> bool {
        self.span() > 2
    }

    /// self が other の真下に入れ子になっているか。
    /// 端点を共有する場合は入れ子とみなさない。
    pub fn is_under(&self, other: &Edge) -> bool {
        other.u < self.u && self.v < other.v
    }

    /// 2辺が同時に存在できるか（どちら向きにも入れ子でない）
    pub fn coexists_with(&self, other: &Edge) -> bool {
        !self.is_under(other) && !other.is_under(self)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_normalizes_order() {
        let e = Edge::new(5, 2).unwrap();
        assert_eq!(e.u(), 2);
        assert_eq!(e.v(), 5);
        assert_eq!(e, Edge::new(2, 5).unwrap());
    }

    #[test]
    fn edge_rejects_self_loop() {
        assert!(Edge::new(3, 3).is_err());
    }

    #[test]
    fn edge_rejects_node_zero() {
        assert!(Edge::new(0, 4).is_err());
    }

    #[test]
    fn span_and_long_classification() {
        assert_eq!(Edge::new(1, 2).unwrap().span(), 1);
        assert!(!Edge::new(1, 3).unwrap().is_long());
        assert!(Edge::new(1, 4).unwrap().is_long());
    }

    #[test]
    fn under_requires_strict_containment() {
        let outer = Edge::new(1, 6).unwrap();
        let inner = Edge::new(2, 5).unwrap();
        assert!(inner.is_under(&outer));
        assert!(!outer.is_under(&inner));
    }

    #[test]
    fn shared_endpoint_is_not_nesting() {
        let a = Edge::new(1, 6).unwrap();
        let b = Edge::new(2, 6).unwrap();
        assert!(!b.is_under(&a));
        assert!(!a.is_under(&b));
        assert!(a.coexists_with(&b));
    }

    #[test]
    fn crossing_chords_coexist() {
        let a = Edge::new(1, 5).unwrap();
        let b = Edge::new(2, 6).unwrap();
        assert!(a.coexists_with(&b));
        assert!(b.coexists_with(&a));
    }

    #[test]
    fn nested_chords_do_not_coexist() {
        let outer = Edge::new(1, 7).unwrap();
        let inner = Edge::new(2, 6).unwrap();
        assert!(!outer.coexists_with(&inner));
        assert!(!inner.coexists_with(&outer));
    }
}
