// 永続化のインフラ層

pub mod adjlist;
pub mod writer;

pub use adjlist::{load_adjlist, save_adjlist};
pub use writer::{FileGraphSink, GraphSink, MemoryGraphSink};
