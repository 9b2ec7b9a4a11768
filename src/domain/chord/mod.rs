// コード（長い辺）関連のドメイン層

pub mod legality;

pub use legality::{all_pairs_legal, coexists, correct_long_edges, is_maximal};
