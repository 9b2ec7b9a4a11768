// 生成・列挙設定のValue Objects

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_NODE_COUNT;

/// ノード数を表すValue Object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCount(usize);

impl NodeCount {
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(anyhow!("ノード数は1以上である必要があります"));
        }
        if n > MAX_NODE_COUNT {
            return Err(anyhow!("ノード数が大きすぎます: {} (上限{})", n, MAX_NODE_COUNT));
        }
        Ok(Self(n))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

/// 全列挙の設定
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumerateConfig {
    pub nodes: NodeCount,
    /// 進捗ログを書く間隔（探索ノード数）
    pub progress_interval: u64,
}

impl EnumerateConfig {
    pub fn new(nodes: NodeCount) -> Self {
        Self {
            nodes,
            progress_interval: 1_000_000,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(anyhow!("進捗間隔は1以上"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_count_rejects_zero() {
        assert!(NodeCount::new(0).is_err());
    }

    #[test]
    fn node_count_accepts_valid() {
        assert_eq!(NodeCount::new(6).unwrap().get(), 6);
        assert!(NodeCount::new(MAX_NODE_COUNT).is_ok());
    }

    #[test]
    fn node_count_rejects_too_large() {
        assert!(NodeCount::new(MAX_NODE_COUNT + 1).is_err());
    }

    #[test]
    fn enumerate_config_default_interval_is_valid() {
        let config = EnumerateConfig::new(NodeCount::new(6).unwrap());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn enumerate_config_rejects_zero_interval() {
        let mut config = EnumerateConfig::new(NodeCount::new(6).unwrap());
        config.progress_interval = 0;
        assert!(config.validate().is_err());
    }
}
