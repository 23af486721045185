use super::kickers::Kickers;
use super::lowball::ace_high;
use super::ranking::Ranking;
use crate::cards::Rank;

/// Which evaluator produced an [`Evaluation`].
///
/// Stored in the top bits of every non-null code, so codes from
/// different variants never collide. Comparing across variants
/// is well-defined but meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    High = 0,
    LowA5 = 1,
    Low2to7 = 2,
    ThreeCard = 3,
    Badugi = 4,
}

impl Variant {
    fn tag(&self) -> u32 {
        (*self as u32) << Evaluation::VARIANT
    }
    /// lowball keys are stored inverted
    fn is_low(&self) -> bool {
        matches!(self, Variant::LowA5 | Variant::Low2to7)
    }
    /// rank indices start at the ace instead of the deuce
    fn is_ace_low(&self) -> bool {
        matches!(self, Variant::LowA5 | Variant::Badugi)
    }
}

impl TryFrom<u32> for Variant {
    type Error = String;
    fn try_from(n: u32) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Variant::High),
            1 => Ok(Variant::LowA5),
            2 => Ok(Variant::Low2to7),
            3 => Ok(Variant::ThreeCard),
            4 => Ok(Variant::Badugi),
            _ => Err(format!("invalid variant tag: {}", n)),
        }
    }
}

/// category, major rank, minor rank, kicker mask.
/// ranks are bit indices in the rank space of the producing variant.
pub(crate) type Made = (Ranking, u8, u8, u16);

/// A packed hand strength.
///
/// One `u32` whose natural order is showdown order: better hands compare
/// greater under every variant, lowball included. Zero is reserved for
/// [`Evaluation::NULL`], the result when no qualifying hand exists, and
/// sorts below every real hand.
///
/// ```text
/// 27..25   variant
/// 24..21   class
/// 20..17   major rank
/// 16..13   minor rank
/// 12..0    kicker mask
/// ```
///
/// Lowball variants store `BODY - key` so that the smallest key
/// becomes the largest code.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation(u32);

impl Evaluation {
    pub const NULL: Self = Self(0);

    const MINOR: u32 = 13;
    const MAJOR: u32 = 17;
    const CLASS: u32 = 21;
    const VARIANT: u32 = 25;
    const BODY: u32 = (1 << Self::VARIANT) - 1;
    const NIBBLE: u32 = 0xF;

    fn key(class: u8, major: u8, minor: u8, kicks: u16) -> u32 {
        debug_assert!((class as u32) <= Self::NIBBLE);
        debug_assert!((major as u32) <= Self::NIBBLE);
        debug_assert!((minor as u32) <= Self::NIBBLE);
        (class as u32) << Self::CLASS
            | (major as u32) << Self::MAJOR
            | (minor as u32) << Self::MINOR
            | (kicks & Rank::mask()) as u32
    }
    /// pack a hand where greater keys win
    pub(crate) fn high(variant: Variant, (ranking, major, minor, kicks): Made) -> Self {
        debug_assert!(!variant.is_low());
        let class = match variant {
            Variant::ThreeCard => ranking.class3(),
            _ => ranking.class(),
        };
        Self(variant.tag() | Self::key(class, major, minor, kicks))
    }
    /// pack a hand where smaller keys win
    pub(crate) fn low(variant: Variant, (ranking, major, minor, kicks): Made) -> Self {
        debug_assert!(variant.is_low());
        let key = Self::key(ranking.class(), major, minor, kicks);
        Self(variant.tag() | (Self::BODY - key))
    }
    /// more cards win, then the lowest ace-low rank mask
    pub(crate) fn badugi(size: usize, ranks: u16) -> Self {
        debug_assert!((1..=4).contains(&size));
        let ranks = (Rank::mask() - (ranks & Rank::mask())) as u32;
        Self(Variant::Badugi.tag() | (size as u32) << Self::CLASS | ranks)
    }

    pub fn code(&self) -> u32 {
        self.0
    }
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
    pub fn variant(&self) -> Option<Variant> {
        match self.is_null() {
            true => None,
            false => Variant::try_from(self.0 >> Self::VARIANT).ok(),
        }
    }
    /// the category, for every variant except badugi
    pub fn ranking(&self) -> Option<Ranking> {
        let class = self.field(Self::CLASS) as u8;
        match self.variant()? {
            Variant::High | Variant::LowA5 | Variant::Low2to7 => Ranking::from_class(class),
            Variant::ThreeCard => Ranking::from_class3(class),
            Variant::Badugi => None,
        }
    }
    /// number of cards in a badugi
    pub fn badugi_size(&self) -> Option<usize> {
        match self.variant()? {
            Variant::Badugi => Some(self.field(Self::CLASS) as usize),
            _ => None,
        }
    }
    /// the rank of the pair, trips, quads, or the top of a straight
    pub fn major(&self) -> Option<Rank> {
        match self.ranking()?.arity() {
            0 => None,
            _ => Some(self.rank(self.field(Self::MAJOR) as u8)),
        }
    }
    /// the lower pair of two pair, or the pair under a full house
    pub fn minor(&self) -> Option<Rank> {
        match self.ranking()?.arity() {
            2 => Some(self.rank(self.field(Self::MINOR) as u8)),
            _ => None,
        }
    }
    /// tie-breaking ranks in standard deuce-low space
    pub fn kickers(&self) -> Kickers {
        Kickers::from(self.mask())
    }

    /// unpack one field of the key, undoing lowball inversion
    fn field(&self, shift: u32) -> u32 {
        let body = self.0 & Self::BODY;
        let body = match self.variant() {
            Some(v) if v.is_low() => Self::BODY - body,
            _ => body,
        };
        let width = match shift {
            0 => Rank::mask() as u32,
            _ => Self::NIBBLE,
        };
        body >> shift & width
    }
    /// kicker mask translated back to deuce-low space
    fn mask(&self) -> u16 {
        let kicks = self.field(0) as u16;
        match self.variant() {
            Some(Variant::Badugi) => ace_high(Rank::mask() - kicks),
            Some(v) if v.is_ace_low() => ace_high(kicks),
            _ => kicks,
        }
    }
    fn rank(&self, index: u8) -> Rank {
        match self.variant() {
            Some(v) if v.is_ace_low() => match index {
                0 => Rank::Ace,
                i => Rank::from(i - 1),
            },
            _ => Rank::from(index),
        }
    }
    /// every rank that decides this hand, most significant first
    fn ranks(&self) -> Vec<Rank> {
        let named = [self.major(), self.minor()].into_iter().flatten();
        let order = match self.variant() {
            Some(v) if v.is_ace_low() => Rank::all()
                .into_iter()
                .rev()
                .skip(1)
                .chain(std::iter::once(Rank::Ace))
                .collect::<Vec<_>>(),
            _ => Rank::all().into_iter().rev().collect::<Vec<_>>(),
        };
        let mask = self.mask();
        named
            .chain(order.into_iter().filter(|r| mask & u16::from(*r) != 0))
            .collect()
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ranks = self
            .ranks()
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        match (self.ranking(), self.badugi_size()) {
            (Some(ranking), _) => write!(f, "{:<14}{}", ranking, ranks),
            (None, Some(n)) => write!(f, "{:<14}{}", format!("Badugi({})", n), ranks),
            (None, None) => write!(f, "Null"),
        }
    }
}
