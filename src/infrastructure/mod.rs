// インフラ層 - 永続化と描画

pub mod render;
pub mod storage;
