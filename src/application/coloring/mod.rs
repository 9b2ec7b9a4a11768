// 彩色のアプリケーション層

pub mod service;

pub use service::color_graph_file;
