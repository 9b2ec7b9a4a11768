// 全列挙のアプリケーション層

pub mod engine;
pub mod service;
pub mod writer;

pub use engine::{chord_universe_size, EnumerationEngine};
pub use service::{enumerate_all_m_graphs, enumerate_into_sink};
pub use writer::spawn_writer_thread;
