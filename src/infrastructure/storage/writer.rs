// 列挙結果の書き込み

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::graph::Graph;
use crate::domain::search::MGraphRecord;
use crate::infrastructure::render::save_svg;
use crate::infrastructure::storage::adjlist::save_adjlist;

/// 列挙された極大mグラフを受け取るtrait
pub trait GraphSink: Send {
    /// 1件を書き込む
    fn write_graph(&mut self, record: &MGraphRecord, graph: &Graph) -> Result<()>;

    /// 書き込みを完了（フラッシュ）
    fn flush(&mut self) -> Result<()>;

    /// 書き込んだ件数
    fn count(&self) -> u64;
}

/// ファイルへの書き込み実装。
/// グラフごとに隣接リストとSVGを出力し、索引を JSON Lines で持つ。
pub struct FileGraphSink {
    out_dir: PathBuf,
    index: BufWriter<File>,
    count: u64,
}

impl FileGraphSink {
    pub fn new(out_dir: &Path) -> Result<Self> {
        let index_path = out_dir.join("index.jsonl");
        let file = File::create(&index_path)
            .with_context(|| format!("索引を作成できません: {}", index_path.display()))?;
        Ok(Self {
            out_dir: out_dir.to_path_buf(),
            index: BufWriter::new(file),
            count: 0,
        })
    }
}

impl GraphSink for FileGraphSink {
    fn write_graph(&mut self, record: &MGraphRecord, graph: &Graph) -> Result<()> {
        let name = format!("m_graph_{}_{}", record.node_count, record.index);
        save_adjlist(graph, &self.out_dir.join(format!("{}.adjlist", name)))?;
        save_svg(
            graph,
            &format!("MGraph n:{}", record.node_count),
            &self.out_dir.join(format!("{}.svg", name)),
        )?;

        let json = serde_json::to_string(record)?;
        writeln!(self.index, "{}", json)?;
        self.count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.index.flush()?;
        Ok(())
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Drop for FileGraphSink {
    fn drop(&mut self) {
        let _ = self.index.flush();
    }
}

/// メモリ内書き込み実装（テスト用）
#[derive(Default)]
pub struct MemoryGraphSink {
    records: Vec<(MGraphRecord, Graph)>,
}

impl MemoryGraphSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[(MGraphRecord, Graph)] {
        &self.records
    }
}

impl GraphSink for MemoryGraphSink {
    fn write_graph(&mut self, record: &MGraphRecord, graph: &Graph) -> Result<()> {
        self.records.push((record.clone(), graph.clone()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn count(&self) -> u64 {
        self.records.len() as u64
    }
}
