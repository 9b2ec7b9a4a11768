// 検索設定と結果のドメイン層

pub mod config;
pub mod result;

pub use config::{EnumerateConfig, NodeCount};
pub use result::{EnumerationSummary, MGraph, MGraphRecord};
