use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;
use super::suit::Suit;

/// Rank and suit statistics derived from the bitmask.
///
/// Because a Hand is laid out in four 13-bit suit lanes, every rank query
/// reduces to boolean algebra over the four lanes. No query allocates.
impl Hand {
    /// the four 13-bit suit lanes, clubs first
    pub fn lanes(&self) -> [u16; 4] {
        Suit::all().map(|suit| self.suit_mask(suit))
    }
    /// 13-bit mask of the ranks present in one suit
    pub fn suit_mask(&self, suit: Suit) -> u16 {
        ((u64::from(*self) >> (13 * u8::from(suit))) as u16) & Rank::mask()
    }
    /// 13-bit mask with one bit per rank present, ignoring suit and multiplicity
    pub fn rank_mask(&self) -> u16 {
        let [c, d, h, s] = self.lanes();
        c | d | h | s
    }
    /// 13-bit masks of the ranks held at least once, twice, three and four times
    pub fn rank_groups(&self) -> [u16; 4] {
        let [c, d, h, s] = self.lanes();
        let ones = c | d | h | s;
        let twos = (c & d) | (c & h) | (c & s) | (d & h) | (d & s) | (h & s);
        let tres = (c & d & h) | (c & d & s) | (c & h & s) | (d & h & s);
        let four = c & d & h & s;
        [ones, twos, tres, four]
    }

    pub fn count_ranks(&self) -> usize {
        self.rank_mask().count_ones() as usize
    }
    /// how many suits of this rank are held, 0 through 4
    pub fn count_rank(&self, rank: Rank) -> usize {
        (u64::from(*self) & u64::from(rank)).count_ones() as usize
    }
    pub fn contains_rank(&self, rank: Rank) -> bool {
        u64::from(*self) & u64::from(rank) != 0
    }
    /// size of the largest same-rank group
    pub fn count_max_rank(&self) -> usize {
        self.rank_groups()
            .iter()
            .take_while(|&&group| group != 0)
            .count()
    }
    /// a card of this rank, clubs preferred over diamonds over hearts over spades.
    /// None when the rank is absent.
    pub fn find(&self, rank: Rank) -> Option<Card> {
        Suit::all()
            .into_iter()
            .map(|suit| Card::from((rank, suit)))
            .find(|card| self.contains(*card))
    }
    /// five consecutive ranks, ace playing high or low
    pub fn has_straight(&self) -> bool {
        crate::evaluation::straight(self.rank_mask()).is_some()
    }
    /// highest rank held. ace is high
    pub fn top_rank(&self) -> Option<Rank> {
        match self.rank_mask() {
            0 => None,
            ranks => Some(Rank::hi(ranks)),
        }
    }
    /// lowest rank held. ace is still high here,
    /// lowball evaluators remap it themselves
    pub fn bottom_rank(&self) -> Option<Rank> {
        match self.rank_mask() {
            0 => None,
            ranks => Some(Rank::lo(ranks)),
        }
    }
    /// adds every suit of every rank in `ranks`, whatever suits it held.
    /// returns whether any card was added
    pub fn insert_ranks(&mut self, ranks: &Hand) -> bool {
        let before = *self;
        Rank::all()
            .into_iter()
            .filter(|rank| ranks.contains_rank(*rank))
            .for_each(|rank| {
                self.insert(rank);
            });
        before != *self
    }

    pub fn count_suits(&self) -> usize {
        Suit::all()
            .iter()
            .filter(|suit| self.contains_suit(**suit))
            .count()
    }
    /// length of this suit
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.suit_mask(suit).count_ones() as usize
    }
    pub fn contains_suit(&self, suit: Suit) -> bool {
        self.suit_mask(suit) != 0
    }
    /// length of the longest suit
    pub fn count_max_suit(&self) -> usize {
        Suit::all()
            .iter()
            .map(|suit| self.count_suit(*suit))
            .max()
            .unwrap_or(0)
    }
    /// highest rank held in this suit
    pub fn flush_rank(&self, suit: Suit) -> Option<Rank> {
        match self.suit_mask(suit) {
            0 => None,
            ranks => Some(Rank::hi(ranks)),
        }
    }
}
