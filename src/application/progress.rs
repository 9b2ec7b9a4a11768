// 探索の進捗管理

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// 進捗統計のスナップショット
#[derive(Clone, Copy, Debug, Default)]
pub struct ProgressStats {
    pub nodes_visited: u64,
    pub leaves_reached: u64,
    pub results_found: u64,
}

/// 探索の進捗カウンタと中断フラグ
pub struct ProgressManager {
    nodes_visited: AtomicU64,
    leaves_reached: AtomicU64,
    results_found: AtomicU64,
    abort_flag: AtomicBool,
    start_time: Instant,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            nodes_visited: AtomicU64::new(0),
            leaves_reached: AtomicU64::new(0),
            results_found: AtomicU64::new(0),
            abort_flag: AtomicBool::new(false),
            start_time: Instant::now(),
        }
    }

    /// 探索を中断
    pub fn abort(&self) {
        self.abort_flag.store(true, Ordering::Relaxed);
    }

    /// 中断されたかチェック
    pub fn is_aborted(&self) -> bool {
        self.abort_flag.load(Ordering::Relaxed)
    }

    /// 探索ノード数を追加
    pub fn add_nodes(&self, count: u64) {
        self.nodes_visited.fetch_add(count, Ordering::Relaxed);
    }

    /// 葉の数を追加
    pub fn add_leaves(&self, count: u64) {
        self.leaves_reached.fetch_add(count, Ordering::Relaxed);
    }

    /// 発見数を追加
    pub fn add_results(&self, count: u64) {
        self.results_found.fetch_add(count, Ordering::Relaxed);
    }

    /// 探索ノード数
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited.load(Ordering::Relaxed)
    }

    /// 経過時間
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 1秒あたりの探索ノード数
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.nodes_visited() as f64 / secs
    }

    /// 現在の統計を取得
    pub fn stats(&self) -> ProgressStats {
        ProgressStats {
            nodes_visited: self.nodes_visited.load(Ordering::Relaxed),
            leaves_reached: self.leaves_reached.load(Ordering::Relaxed),
            results_found: self.results_found.load(Ordering::Relaxed),
        }
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
