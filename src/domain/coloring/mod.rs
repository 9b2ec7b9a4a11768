// 彩色関連のドメイン層

pub mod solver;

pub use solver::chromatic_number;
