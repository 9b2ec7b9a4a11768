// グラフ関連のドメイン層

pub mod backbone;
pub mod edge;
pub mod graph;
pub mod hash;

pub use backbone::{add_backbone_edges, backbone_graph};
pub use edge::Edge;
pub use graph::Graph;
pub use hash::canonical_chord_hash;
