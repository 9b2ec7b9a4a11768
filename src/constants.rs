// mグラフ定数とユーティリティ型定義

use nohash_hasher::BuildNoHashHasher;

/// ====== mグラフ定数 ======

/// コード（長い辺）の最小スパン。
/// 旧版の規則は i+2 と i+3 の間で揺れていたが、バックボーンの
/// (i, i+2) よりさらに1ノード飛ばす j >= i+4 を正式な規則として
/// 固定する。合法性チェックと全列挙の分岐境界の両方がこの定数を
/// 参照する。
pub const MIN_CHORD_SPAN: usize = 4;

/// 生成で許すノード数の上限
pub const MAX_NODE_COUNT: usize = 64;

/// 彩色DPで許すノード数の上限（テーブルは 2^n エントリ）
pub const MAX_COLORING_NODES: usize = 26;

/// ランダム生成の既定出力ディレクトリ
pub const RANDOM_OUTPUT_DIR: &str = "random_m_graphs";

/// 全列挙の既定出力ディレクトリ
pub const ALL_OUTPUT_DIR: &str = "all_m_graphs";

// u64 キー専用のノーハッシュ（正準ハッシュの重複検出用）
pub type U64Map<V> = std::collections::HashMap<u64, V, BuildNoHashHasher<u64>>;
pub type U64Set = std::collections::HashSet<u64, BuildNoHashHasher<u64>>;
