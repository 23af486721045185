use super::hand::Hand;
use super::suit::Suit;
use crate::Arbitrary;

/// an array of 4 unique Suits represents
/// any of the 4! = 24 elements in the Suit permutation group.
/// by assuming a "canonical" order of suits (C < D < H < S),
/// we use [Suit; 4] to map C -> P[0], D -> P[1], H -> P[2], S -> P[3].
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Permutation([Suit; 4]);

/// checked construction. every suit must appear exactly once
impl TryFrom<[Suit; 4]> for Permutation {
    type Error = String;
    fn try_from(suits: [Suit; 4]) -> Result<Self, Self::Error> {
        let seen = suits.iter().fold(0u8, |seen, s| seen | 1 << u8::from(*s));
        match seen {
            0b1111 => Ok(Self(suits)),
            _ => Err(format!("not a suit permutation: {:?}", suits)),
        }
    }
}

/// this yields the Permutation that maps a Hand to its canonical form.
/// suits are sorted by the order() below, and the i-th suit of that
/// sorting is sent to the i-th suit of the canonical order.
impl From<&Hand> for Permutation {
    fn from(hand: &Hand) -> Self {
        Self::sorting(|suit| (hand.suit_mask(suit), 0))
    }
}

/// the Permutation that canonizes `hand` jointly with a reference Hand.
/// the reference decides first, the hand only breaks its ties.
impl From<(&Hand, &Hand)> for Permutation {
    fn from((hand, reference): (&Hand, &Hand)) -> Self {
        Self::sorting(|suit| (reference.suit_mask(suit), hand.suit_mask(suit)))
    }
}

impl Permutation {
    /// the image of a hand under a permutation
    /// is the union of its shifted sub-Hands
    pub fn image(&self, hand: &Hand) -> Hand {
        Suit::all()
            .iter()
            .map(|suit| self.shift(suit, hand))
            .fold(Hand::empty(), Hand::add)
    }
    /// get the image of a Suit under a Permutation
    pub fn map(&self, suit: &Suit) -> Suit {
        self.0[*suit as usize]
    }
    /// the Permutation that undoes this one
    pub fn inverse(&self) -> Self {
        let mut inverse = Suit::all();
        Suit::all()
            .iter()
            .for_each(|suit| inverse[self.map(suit) as usize] = *suit);
        Self(inverse)
    }
    /// the first Permutation, in exhaust() order, carrying `source` onto `dest`.
    /// None when the two hands are not suit-isomorphic
    pub fn find(source: &Hand, dest: &Hand) -> Option<Self> {
        if source.size() != dest.size() {
            return None;
        }
        Self::exhaust()
            .into_iter()
            .find(|permutation| permutation.image(source) == *dest)
    }

    /// rank suits by (key of primary lanes, key of secondary lanes),
    /// each compared by card count then by rank mask, all descending.
    /// tie delegates to Suit order
    fn sorting<F>(key: F) -> Self
    where
        F: Fn(Suit) -> (u16, u16),
    {
        let mut permutation = Suit::all();
        let mut suits = Suit::all().map(|suit| (suit, key(suit)));
        suits.sort_by(Self::order);
        suits
            .into_iter()
            .enumerate()
            .for_each(|(i, (suit, _))| permutation[suit as usize] = Suit::from(i as u8));
        Self(permutation)
    }

    /// impose order by breaking symmetries
    /// 1. who has more primary cards?
    /// 2. who has stronger primary cards?
    /// 3. who has more secondary cards?
    /// 4. who has stronger secondary cards?
    /// 5. tie delegates to Suit order
    fn order(
        hearts: &(Suit, (u16, u16)),
        spades: &(Suit, (u16, u16)),
    ) -> std::cmp::Ordering {
        let (h, (h1, h2)) = hearts;
        let (s, (s1, s2)) = spades;
        std::cmp::Ordering::Equal
            .then_with(|| s1.count_ones().cmp(&h1.count_ones()))
            .then_with(|| s1.cmp(h1))
            .then_with(|| s2.count_ones().cmp(&h2.count_ones()))
            .then_with(|| s2.cmp(h2))
            .then_with(|| h.cmp(s))
    }

    /// the hand here gets filtered by the "old" suit
    /// and then we bitshift whole 13-card lanes so that it is in its "new" suit
    /// e.g. Full Hand -> Hearts Hand -> Spades Hand
    fn shift(&self, suit: &Suit, hand: &Hand) -> Hand {
        let old = *suit as i8;
        let new = self.map(suit) as i8;
        let shift = (new - old) * 13;
        let cards = u64::from(hand.of(suit));
        if shift >= 0 {
            Hand::from(cards << shift as u64)
        } else {
            Hand::from(cards >> shift.unsigned_abs() as u64)
        }
    }

    pub const fn identity() -> Self {
        Self(Suit::all())
    }
    /// c <-> s, d <-> h
    pub const fn flip() -> Self {
        Self([Suit::S, Suit::H, Suit::D, Suit::C])
    }
    pub const fn exhaust() -> [Self; 24] {
        [
            Self([Suit::C, Suit::D, Suit::H, Suit::S]),
            Self([Suit::C, Suit::D, Suit::S, Suit::H]),
            Self([Suit::C, Suit::H, Suit::D, Suit::S]),
            Self([Suit::C, Suit::H, Suit::S, Suit::D]),
            Self([Suit::C, Suit::S, Suit::D, Suit::H]),
            Self([Suit::C, Suit::S, Suit::H, Suit::D]),
            Self([Suit::D, Suit::C, Suit::H, Suit::S]),
            Self([Suit::D, Suit::C, Suit::S, Suit::H]),
            Self([Suit::D, Suit::H, Suit::C, Suit::S]),
            Self([Suit::D, Suit::H, Suit::S, Suit::C]),
            Self([Suit::D, Suit::S, Suit::C, Suit::H]),
            Self([Suit::D, Suit::S, Suit::H, Suit::C]),
            Self([Suit::H, Suit::C, Suit::D, Suit::S]),
            Self([Suit::H, Suit::C, Suit::S, Suit::D]),
            Self([Suit::H, Suit::D, Suit::C, Suit::S]),
            Self([Suit::H, Suit::D, Suit::S, Suit::C]),
            Self([Suit::H, Suit::S, Suit::C, Suit::D]),
            Self([Suit::H, Suit::S, Suit::D, Suit::C]),
            Self([Suit::S, Suit::C, Suit::D, Suit::H]),
            Self([Suit::S, Suit::C, Suit::H, Suit::D]),
            Self([Suit::S, Suit::D, Suit::C, Suit::H]),
            Self([Suit::S, Suit::D, Suit::H, Suit::C]),
            Self([Suit::S, Suit::H, Suit::C, Suit::D]),
            Self([Suit::S, Suit::H, Suit::D, Suit::C]),
        ]
    }
}

impl From<Permutation> for [Suit; 4] {
    fn from(p: Permutation) -> Self {
        p.0
    }
}

impl Arbitrary for Permutation {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        *Self::exhaust()
            .choose(rng)
            .expect("permutation group is non-empty")
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for suit in Suit::all() {
            write!(f, "{}{}", suit, self.map(&suit))?;
        }
        Ok(())
    }
}
