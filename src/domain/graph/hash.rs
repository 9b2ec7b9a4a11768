// コード集合の正準ハッシュ（FNV-1a 64bit）

use super::edge::Edge;

const FNV_PRIME: u64 = 1099511628211;
const FNV_OFFSET: u64 = 14695981039346656037;

#[inline(always)]
fn feed_byte(h: u64, byte: u8) -> u64 {
    (h ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline(always)]
fn feed_usize(mut h: u64, value: usize) -> u64 {
    for byte in (value as u64).to_le_bytes() {
        h = feed_byte(h, byte);
    }
    h
}

/// ノード数とコード集合から正準ハッシュを計算する。
/// コードは追加順に依存しないよう (u, v) の昇順に並べ替えてから
/// 流し込む。同じ集合なら必ず同じ値になる。
pub fn canonical_chord_hash(node_count: usize, chords: &[Edge]) -> u64 {
    let mut sorted: Vec<Edge> = chords.to_vec();
    sorted.sort_unstable();

    let mut h = FNV_OFFSET;
    h = feed_usize(h, node_count);
    for e in &sorted {
        h = feed_usize(h, e.u());
        h = feed_usize(h, e.v());
    }
    h
}
