use super::hand::Hand;

/// Pascal's triangle up to 52 choose 52, built at compile time.
/// C(52, 26) is the largest entry and fits comfortably in a u64.
const CHOOSE: [[u64; 53]; 53] = {
    let mut table = [[0u64; 53]; 53];
    let mut n = 0;
    while n < 53 {
        table[n][0] = 1;
        let mut k = 1;
        while k <= n {
            table[n][k] = table[n - 1][k - 1] + table[n - 1][k];
            k += 1;
        }
        n += 1;
    }
    table
};

/// n choose k, zero when k > n
pub const fn choose(n: usize, k: usize) -> u64 {
    if k > n { 0 } else { CHOOSE[n][k] }
}

/// combinadic of a bit set: the i-th lowest set bit at position p
/// contributes C(p, i + 1). over all k-subsets of an n-bit alphabet this
/// is a bijection onto 0..C(n, k), increasing in colexicographic order.
fn combinadic(mut bits: u64) -> usize {
    let mut index = 0;
    let mut i = 1;
    while bits > 0 {
        let p = bits.trailing_zeros() as usize;
        index += choose(p, i) as usize;
        bits &= bits - 1;
        i += 1;
    }
    index
}

/// indexing into precomputed tables
impl Hand {
    /// dense index among all Hands of the same size.
    /// k-card Hands map onto exactly 0..C(52, k) with no gaps
    pub fn colex(&self) -> usize {
        combinadic(u64::from(*self))
    }
    /// dense index of the rank mask among rank sets of the same size.
    /// suits and duplicate ranks are ignored, so the range is 0..C(13, k)
    pub fn rank_colex(&self) -> usize {
        combinadic(self.rank_mask() as u64)
    }
}
