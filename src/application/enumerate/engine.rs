// 極大mグラフの全列挙エンジン

use anyhow::Result;
use num_bigint::BigUint;
use num_traits::One;

use crate::application::progress::ProgressManager;
use crate::constants::{U64Set, MIN_CHORD_SPAN};
use crate::domain::chord::is_maximal;
use crate::domain::graph::{backbone_graph, canonical_chord_hash, Edge, Graph};
use crate::domain::search::{EnumerateConfig, EnumerationSummary, MGraphRecord};
use crate::vlog;

/// 発見した極大mグラフの送り先
pub type EmitFn<'a> = dyn FnMut(MGraphRecord, &Graph) -> Result<()> + 'a;

/// コード候補の全体数（スパンが MIN_CHORD_SPAN 以上のペア数）
pub fn chord_universe_size(n: usize) -> usize {
    if n <= MIN_CHORD_SPAN {
        return 0;
    }
    let k = n - MIN_CHORD_SPAN;
    k * (k + 1) / 2
}

/// 深さ優先のバックトラック探索でコード配置を尽くすエンジン。
///
/// グラフは1本の探索経路がその場で書き換え、戻るときに必ず元に
/// 戻す。左端点は昇順、右端点は増加する左端点をまたいで非減少に
/// 保つ。この順序が同じ極大集合を二度導出しないための不変条件で、
/// 同時に入れ子のペアが探索中に現れないことも保証している。
pub struct EnumerationEngine<'a> {
    graph: Graph,
    long_edges: Vec<Edge>,
    n: usize,
    emitted: u64,
    duplicates: u64,
    seen: U64Set,
    progress: &'a ProgressManager,
    progress_interval: u64,
    emit: &'a mut EmitFn<'a>,
}

impl<'a> EnumerationEngine<'a> {
    pub fn new(
        config: &EnumerateConfig,
        progress: &'a ProgressManager,
        emit: &'a mut EmitFn<'a>,
    ) -> Result<Self> {
        config.validate()?;
        let n = config.nodes.get();
        Ok(Self {
            graph: backbone_graph(n)?,
            long_edges: Vec::new(),
            n,
            emitted: 0,
            duplicates: 0,
            seen: U64Set::default(),
            progress,
            progress_interval: config.progress_interval,
            emit,
        })
    }

    /// 全列挙を実行してサマリーを返す
    pub fn run(mut self) -> Result<EnumerationSummary> {
        let universe = chord_universe_size(self.n);
        vlog!(
            "全列挙開始: n={} コード候補={} 探索空間の上界=2^{}={}",
            self.n,
            universe,
            universe,
            BigUint::one() << universe
        );

        self.descend(1, 0)?;

        let stats = self.progress.stats();
        let elapsed = self.progress.elapsed().as_secs_f64();
        Ok(EnumerationSummary {
            emitted: self.emitted,
            duplicates: self.duplicates,
            nodes_visited: stats.nodes_visited,
            leaves: stats.leaves_reached,
            elapsed_seconds: elapsed,
            nodes_per_second: self.progress.nodes_per_second(),
        })
    }

    /// left から先のコード配置をすべて試す
    fn descend(&mut self, left: usize, rightmost: usize) -> Result<()> {
        if self.progress.is_aborted() {
            return Ok(());
        }
        self.progress.add_nodes(1);
        let visited = self.progress.nodes_visited();
        if visited % self.progress_interval == 0 {
            vlog!(
                "探索中: node={} 発見={} rate={:.0}/s",
                visited,
                self.emitted,
                self.progress.nodes_per_second()
            );
        }

        if left + MIN_CHORD_SPAN > self.n {
            return self.emit_if_maximal();
        }
        let lo = rightmost.max(left + MIN_CHORD_SPAN);
        self.choose_rights(left, lo, rightmost)
    }

    /// left に付けるコードの右端点を昇順に選ぶ。
    /// 最初の分岐は「この left にはもう付けない」。
    fn choose_rights(&mut self, left: usize, next: usize, rightmost: usize) -> Result<()> {
        self.descend(left + 1, rightmost)?;

        for r in next..=self.n {
            let edge = Edge::pair(left, r);
            self.graph.insert(edge)?;
            self.long_edges.push(edge);

            let result = self.choose_rights(left, r + 1, r);

            // 再帰が失敗しても必ず取り除いてから伝播する
            self.long_edges.pop();
            self.graph.remove(&edge);
            result?;
        }
        Ok(())
    }

    /// 葉で極大性を判定し、極大なら通し番号を付けて送り出す
    fn emit_if_maximal(&mut self) -> Result<()> {
        self.progress.add_leaves(1);

        if !is_maximal(&self.graph, &self.long_edges) {
            return Ok(());
        }

        let hash = canonical_chord_hash(self.n, &self.long_edges);
        if !self.seen.insert(hash) {
            // 順序不変条件の下では到達しない。件数だけ残す。
            self.duplicates += 1;
            return Ok(());
        }

        self.emitted += 1;
        let record = MGraphRecord {
            index: self.emitted,
            node_count: self.n,
            long_edges: self.long_edges.clone(),
            hash,
        };
        (self.emit)(record, &self.graph)?;
        self.progress.add_results(1);
        Ok(())
    }
}
