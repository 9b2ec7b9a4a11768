// アプリケーション層 - 生成・列挙・彩色のユースケース

pub mod coloring;
pub mod enumerate;
pub mod progress;
pub mod random_gen;
