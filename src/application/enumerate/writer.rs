// ファイル書き出しスレッド

use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use anyhow::Result;
use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::domain::graph::Graph;
use crate::domain::search::MGraphRecord;
use crate::infrastructure::storage::{FileGraphSink, GraphSink};

/// 書き込みチャネルとスレッドハンドルを返す。
/// シンクの生成はスレッド起動前に行い、失敗を呼び出し側で拾う。
pub fn spawn_writer_thread(
    out_dir: PathBuf,
) -> Result<(Sender<(MGraphRecord, Graph)>, JoinHandle<Result<u64>>)> {
    let sink = FileGraphSink::new(&out_dir)?;
    let (tx, rx) = unbounded::<(MGraphRecord, Graph)>();

    let handle = thread::spawn(move || writer_thread_main(rx, sink));

    Ok((tx, handle))
}

/// ライタースレッドのメイン処理。
/// 送信側が全部ドロップされたら抜けて、書いた件数を返す。
fn writer_thread_main(
    rx: Receiver<(MGraphRecord, Graph)>,
    mut sink: FileGraphSink,
) -> Result<u64> {
    while let Ok((record, graph)) = rx.recv() {
        sink.write_graph(&record, &graph)?;
    }
    sink.flush()?;
    Ok(sink.count())
}
