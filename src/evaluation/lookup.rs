use crate::cards::Rank;
use std::sync::OnceLock;

/// A-2-3-4-5, the only straight where the ace plays low
pub const WHEEL: u16 = 0b_1000000001111;

/// one entry per 13-bit rank mask
static STRAIGHTS: OnceLock<Box<[Option<Rank>]>> = OnceLock::new();

/// top rank of the best straight in a rank mask, the wheel counting
/// as five-high. bits above the thirteenth are ignored.
///
/// answered from a table that is built on first use and shared
/// read-only by every thread afterwards.
pub fn straight(ranks: u16) -> Option<Rank> {
    STRAIGHTS.get_or_init(build)[(ranks & Rank::mask()) as usize]
}

fn build() -> Box<[Option<Rank>]> {
    log::debug!("{:<32}{:<32}", "building straight table", 1 << 13);
    (0..=Rank::mask()).map(|ranks| scan(ranks, true)).collect()
}

/// the bit-parallel search behind the table.
/// bit i survives the shifts iff ranks i-4 through i are all present.
/// deuce-to-seven lowball scans with `wheel` off, where the ace is only ever high.
pub fn scan(ranks: u16, wheel: bool) -> Option<Rank> {
    let ranks = ranks & Rank::mask();
    let mut bits = ranks;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    if bits > 0 {
        Some(Rank::from(bits))
    } else if wheel && WHEEL == (WHEEL & ranks) {
        Some(Rank::Five)
    } else {
        None
    }
}
