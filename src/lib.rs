// mグラフ生成と厳密彩色 - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use constants::{MAX_COLORING_NODES, MAX_NODE_COUNT, MIN_CHORD_SPAN};
pub use domain::coloring::chromatic_number;
pub use domain::graph::{Edge, Graph};
pub use domain::search::{MGraph, NodeCount};
