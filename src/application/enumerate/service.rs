// 全列挙サービス

use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::application::enumerate::engine::EnumerationEngine;
use crate::application::enumerate::writer::spawn_writer_thread;
use crate::application::progress::ProgressManager;
use crate::domain::graph::Graph;
use crate::domain::search::{EnumerateConfig, EnumerationSummary, MGraphRecord};
use crate::infrastructure::storage::GraphSink;

/// すべての極大mグラフを列挙して出力ディレクトリに書き出す。
/// ディレクトリの作成は呼び出し側の責務で、ここでは存在だけ確認する。
pub fn enumerate_all_m_graphs(
    config: &EnumerateConfig,
    out_dir: &Path,
) -> Result<EnumerationSummary> {
    if !out_dir.is_dir() {
        return Err(anyhow!(
            "出力ディレクトリが存在しません: {}",
            out_dir.display()
        ));
    }

    let progress = ProgressManager::new();
    let (tx, handle) = spawn_writer_thread(out_dir.to_path_buf())?;

    let mut emit = move |record: MGraphRecord, graph: &Graph| {
        tx.send((record, graph.clone()))
            .map_err(|_| anyhow!("書き込みスレッドが停止しています"))
    };
    let engine = EnumerationEngine::new(config, &progress, &mut emit)?;
    let summary = engine.run();

    // senderを落としてからjoinする
    drop(emit);
    let written = handle
        .join()
        .map_err(|_| anyhow!("書き込みスレッドがパニックしました"))?
        .context("書き込みスレッドが失敗しました")?;

    let summary = summary?;
    if written != summary.emitted {
        return Err(anyhow!(
            "書き込み件数が一致しません: emitted={} written={}",
            summary.emitted,
            written
        ));
    }
    Ok(summary)
}

/// シンクに直接書き込む列挙（テスト・組み込み用）
pub fn enumerate_into_sink(
    config: &EnumerateConfig,
    sink: &mut dyn GraphSink,
) -> Result<EnumerationSummary> {
    let progress = ProgressManager::new();
    let mut emit = |record: MGraphRecord, graph: &Graph| sink.write_graph(&record, graph);
    let engine = EnumerationEngine::new(config, &progress, &mut emit)?;
    engine.run()
}
