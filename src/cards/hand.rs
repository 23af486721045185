use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// Hand represents an unordered set of Cards.
///
/// A single word holds the full set independent of size: a u64 whose 52
/// least significant bits are one per card, laid out suit by suit
/// `[2c..Ac, 2d..Ad, 2h..Ah, 2s..As]`. Copying is a word copy and nothing
/// allocates except [`Hand::cards`] and [`Hand::hands`].
///
/// No public operation ever sets a bit above the 52nd, so the derived
/// `Eq`, `Ord` and `Hash` on the raw mask are valid set semantics and the
/// mask can be used directly as a table or sort key.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn full() -> Self {
        Self(Self::mask())
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    /// union of two disjoint hands
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.disjoint(&rhs));
        Self(lhs.0 | rhs.0)
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
    pub fn fill(&mut self) {
        self.0 = Self::mask();
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.0, &mut other.0);
    }

    /// every card of `cards` is in this hand.
    /// takes a single Card or a whole Hand
    pub fn contains<T: Into<Hand>>(&self, cards: T) -> bool {
        let cards = cards.into();
        self.0 & cards.0 == cards.0
    }
    pub fn insert<T: Into<Hand>>(&mut self, cards: T) -> &mut Self {
        self.0 |= cards.into().0;
        self
    }
    pub fn remove<T: Into<Hand>>(&mut self, cards: T) -> &mut Self {
        self.0 &= !cards.into().0;
        self
    }
    pub fn disjoint(&self, other: &Self) -> bool {
        self.0 & other.0 == 0
    }
    pub fn intersects(&self, other: &Self) -> bool {
        !self.disjoint(other)
    }

    /// the cards of a single suit, still in their own lane
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }

    /// break into Cards, in bit order
    pub fn cards(&self) -> Vec<Card> {
        self.into_iter().collect()
    }
    /// break into single-card Hands, in bit order
    pub fn hands(&self) -> Vec<Hand> {
        self.into_iter().map(Hand::from).collect()
    }

    /// sorted ranks with duplicates, highest first: `AAK72`.
    /// suits are lost, so this does not parse back into a Hand.
    pub fn ranks_string(&self) -> String {
        let mut ranks = self.into_iter().map(|c| c.rank()).collect::<Vec<_>>();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks.iter().map(|r| r.to_string()).collect()
    }
    /// one character per rank, ace first: `1000000000101`
    pub fn rank_bit_string(&self) -> String {
        format!("{:013b}", self.rank_mask())
    }
}

/// we can empty a hand from low to high
/// by popping the lowest card until the hand is empty
pub struct Cards(u64);

impl Iterator for Cards {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            n => {
                let card = Card::from(n.trailing_zeros() as u8);
                self.0 = n & (n - 1);
                Some(card)
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}
impl ExactSizeIterator for Cards {}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = Cards;
    fn into_iter(self) -> Self::IntoIter {
        Cards(self.0)
    }
}
impl IntoIterator for &Hand {
    type Item = Card;
    type IntoIter = Cards;
    fn into_iter(self) -> Self::IntoIter {
        Cards(self.0)
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        Self::from(rand::random::<u64>())
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Jc, Ts, Js]
/// xxxxxxxxxxxx 0001100000000000000000000000000000000000001000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(c: Card) -> Self {
        Self(u64::from(c))
    }
}

/// the four cards of a rank
impl From<Rank> for Hand {
    fn from(r: Rank) -> Self {
        Self(u64::from(r))
    }
}

/// the thirteen cards of a suit
impl From<Suit> for Hand {
    fn from(s: Suit) -> Self {
        Self(u64::from(s))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.cards()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// lenient str conversion.
/// reads two-character tokens, whitespace ignored, until the first one
/// that is not a card. whatever parsed before that point is kept.
impl From<&str> for Hand {
    fn from(s: &str) -> Self {
        Self::parse(s).0
    }
}

/// strict str conversion.
/// fails, naming the offending token, unless every token is a card.
impl std::str::FromStr for Hand {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::parse(s) {
            (hand, None) => Ok(hand),
            (_, Some(rest)) => Err(format!("invalid card token: {}", rest)),
        }
    }
}

impl Hand {
    /// parse cards until failure, returning the cards read so far
    /// and the unparsed remainder, if any
    fn parse(s: &str) -> (Self, Option<String>) {
        let chars = s.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
        let mut hand = Self::empty();
        for (i, pair) in chars.chunks(2).enumerate() {
            match Card::try_from(pair.iter().collect::<String>().as_str()) {
                Ok(card) => hand.insert(card),
                Err(_) => return (hand, Some(chars[i * 2..].iter().collect())),
            };
        }
        (hand, None)
    }
}

/// concatenated card tokens in bit order.
/// `{}` uses suit letters and always parses back to the same Hand.
/// `{:#}` uses suit glyphs for terminals.
impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self {
            if f.alternate() {
                write!(f, "{:#}", card)?;
            } else {
                write!(f, "{}", card)?;
            }
        }
        Ok(())
    }
}

impl std::ops::BitAnd for Hand {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}
impl std::ops::BitOr for Hand {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
impl std::ops::BitXor for Hand {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}
impl std::ops::BitAndAssign for Hand {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}
impl std::ops::BitOrAssign for Hand {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
impl std::ops::BitXorAssign for Hand {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn raw_mask_is_truncated() {
        assert_eq!(u64::from(Hand::from(u64::MAX)), Hand::mask());
        assert_eq!(Hand::full().size(), 52);
        let mut hand = Hand::empty();
        hand.fill();
        assert_eq!(hand, Hand::full());
        hand.clear();
        assert_eq!(hand, Hand::empty());
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::from("Jc Ts 2c Js").into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn decomposition() {
        let hand = Hand::from("AhKd2c");
        let hands = hand.hands();
        assert_eq!(hand.cards().len(), 3);
        assert_eq!(hands.len(), 3);
        assert!(hands.iter().all(|h| h.size() == 1));
        assert_eq!(hands.into_iter().fold(Hand::empty(), Hand::add), hand);
    }

    #[test]
    fn membership() {
        let mut hand = Hand::from("AcKcQc");
        let ace = Card::try_from("Ac").unwrap();
        assert!(hand.contains(ace));
        assert!(hand.contains(Hand::from("KcAc")));
        assert!(!hand.contains(Hand::from("KcAd")));
        hand.remove(ace).insert(Hand::from("2d3d"));
        assert!(!hand.contains(ace));
        assert_eq!(hand, Hand::from("Kc Qc 2d 3d"));
        assert!(hand.intersects(&Hand::from("2d")));
        assert!(hand.disjoint(&Hand::from("2h")));
    }

    #[test]
    fn set_algebra() {
        let a = Hand::from("AcKcQc");
        let b = Hand::from("QcJcTc");
        assert_eq!(a & b, Hand::from("Qc"));
        assert_eq!(a | b, Hand::from("AcKcQcJcTc"));
        assert_eq!(a ^ b, Hand::from("AcKcJcTc"));
        let mut c = a;
        c |= b;
        assert_eq!(c, a | b);
        c ^= b;
        assert_eq!(c, Hand::from("AcKc"));
    }

    #[test]
    fn disjoint_sizes_add() {
        for _ in 0..256 {
            let a = Hand::random();
            let b = Hand::random() & a.complement();
            assert_eq!((a | b).size(), a.size() + b.size());
        }
    }

    #[test]
    fn order_follows_mask() {
        let mut lo = Hand::from("2c");
        let mut hi = Hand::from("2d");
        assert!(lo < hi);
        lo.swap(&mut hi);
        assert!(lo > hi);
    }

    #[test]
    fn partial_parse_keeps_prefix() {
        assert_eq!(Hand::from("AsKs Xx Qs"), Hand::from("AsKs"));
        assert_eq!(Hand::from("garbage"), Hand::empty());
        assert!("AsKs Xx".parse::<Hand>().is_err());
        assert_eq!("As Ks".parse::<Hand>(), Ok(Hand::from("AsKs")));
    }

    #[test]
    fn display_round_trip() {
        let hand = Hand::random();
        assert_eq!(Hand::from(hand.to_string().as_str()), hand);
        assert_eq!(Hand::from(format!("{:#}", hand).as_str()), hand);
        assert_eq!(Hand::from("Ks 2c Ah").to_string(), "2cAhKs");
    }

    #[test]
    fn lossy_rank_strings() {
        let hand = Hand::from("Ah 2c Kd Ac 7s");
        assert_eq!(hand.ranks_string(), "AAK72");
        assert_eq!(hand.rank_bit_string(), "1100000100001");
    }
}
