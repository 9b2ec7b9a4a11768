// ランダム生成のアプリケーション層

pub mod service;

pub use service::generate_random_m_graph;
