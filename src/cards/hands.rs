use super::card::Card;
use super::colex::choose;
use super::hand::Hand;

/// Combinatorial iterator over all n-card hands from a deck.
///
/// Generates all C(k, n) combinations of n cards from the k available cards
/// (those not blocked by the mask), in colex order. Uses bit-twiddling to
/// generate successive combinations without storing them in memory.
///
/// # Construction
///
/// Created from `(n, mask)` where `n` is the hand size and `mask` is a [`Hand`]
/// of cards to exclude (already dealt cards).
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    /// first state past the deck
    const DONE: u64 = 1 << 52;

    /// Total number of remaining combinations.
    pub fn combinations(&self) -> usize {
        if self.exhausted() {
            return 0;
        }
        let n = 52 - Hand::from(self.mask).size();
        let k = Hand::from(self.next).size();
        choose(n, k) as usize
    }
    /// Tests whether iteration is complete.
    fn exhausted(&self) -> bool {
        (64 - 52) > self.next.leading_zeros()
    }
    /// Gosper's hack for next bit permutation with same popcount.
    ///
    /// See: https://graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation
    fn permute(&self) -> u64 {
        if self.next == 0 {
            return Self::DONE;
        }
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a.wrapping_add(1);
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d.wrapping_sub(1);
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }
    fn look(&self) -> Hand {
        Hand::from(self.next)
    }
    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 || self.exhausted() {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let last = self.look();
            self.advance();
            Some(last)
        }
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let mut this = Self {
            next: match n {
                0..=52 => (1 << n) - 1,
                _ => Self::DONE,
            },
            mask: u64::from(mask),
        };
        while this.next & this.mask > 0 && !this.exhausted() {
            this.next = this.permute();
        }
        this
    }
}

/// Every k-card subset of one Hand.
///
/// Gosper's hack runs over a compact n-bit counter, one bit per card held,
/// and each state is scattered back onto the Hand's own cards. Evaluators
/// that score the best k of n cards walk this instead of the full deck.
pub struct Subsets {
    cards: [Card; 52],
    n: usize,
    next: u64,
}

impl Iterator for Subsets {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >> self.n != 0 {
            return None;
        }
        let x = self.next;
        let mut bits = x;
        let mut hand = Hand::empty();
        while bits > 0 {
            hand.insert(self.cards[bits.trailing_zeros() as usize]);
            bits &= bits - 1;
        }
        self.next = match x {
            0 => 1 << self.n,
            x => {
                let a = x | (x - 1);
                let b = a + 1;
                b | ((!a & b) - 1) >> (1 + x.trailing_zeros())
            }
        };
        Some(hand)
    }
}

impl Hand {
    /// all subsets of exactly k cards, C(size, k) of them.
    /// k larger than the Hand yields nothing
    pub fn subsets(&self, k: usize) -> Subsets {
        let mut cards = [Card::from(0u8); 52];
        let n = self.size();
        self.into_iter()
            .enumerate()
            .for_each(|(i, card)| cards[i] = card);
        Subsets {
            cards,
            n,
            next: if k > n { 1 << n } else { (1 << k) - 1 },
        }
    }
}
