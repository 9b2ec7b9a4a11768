// ドメイン層 - mグラフのビジネスロジック

pub mod chord;
pub mod coloring;
pub mod graph;
pub mod search;
