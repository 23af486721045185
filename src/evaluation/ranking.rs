/// A poker hand's category.
///
/// Declaration order is the five-card high order, so the derived `Ord`
/// ranks categories the way a standard showdown does. Three-card games
/// reorder the middle of the table, see [`Ranking::from_class3`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOAK = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOAK = 8,
    StraightFlush = 9,
}

impl Ranking {
    /// how many named ranks (pair, trips, straight top, ...) lead the hand
    /// before kickers break ties
    pub fn arity(&self) -> usize {
        match self {
            Ranking::HighCard | Ranking::Flush => 0,
            Ranking::TwoPair | Ranking::FullHouse => 2,
            _ => 1,
        }
    }
    /// position in the five-card order
    pub fn class(&self) -> u8 {
        *self as u8
    }
    /// position in the three-card order:
    /// trips beat straights, straights beat flushes
    pub(crate) fn class3(&self) -> u8 {
        match self {
            Ranking::HighCard => 1,
            Ranking::OnePair => 2,
            Ranking::Flush => 3,
            Ranking::Straight => 4,
            Ranking::ThreeOAK => 5,
            Ranking::StraightFlush => 6,
            Ranking::TwoPair | Ranking::FullHouse | Ranking::FourOAK => {
                unreachable!("three cards cannot make {:?}", self)
            }
        }
    }
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            1 => Some(Ranking::HighCard),
            2 => Some(Ranking::OnePair),
            3 => Some(Ranking::TwoPair),
            4 => Some(Ranking::ThreeOAK),
            5 => Some(Ranking::Straight),
            6 => Some(Ranking::Flush),
            7 => Some(Ranking::FullHouse),
            8 => Some(Ranking::FourOAK),
            9 => Some(Ranking::StraightFlush),
            _ => None,
        }
    }
    pub fn from_class3(class: u8) -> Option<Self> {
        match class {
            1 => Some(Ranking::HighCard),
            2 => Some(Ranking::OnePair),
            3 => Some(Ranking::Flush),
            4 => Some(Ranking::Straight),
            5 => Some(Ranking::ThreeOAK),
            6 => Some(Ranking::StraightFlush),
            _ => None,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Ranking::HighCard => "HighCard",
            Ranking::OnePair => "OnePair",
            Ranking::TwoPair => "TwoPair",
            Ranking::ThreeOAK => "ThreeOfAKind",
            Ranking::Straight => "Straight",
            Ranking::Flush => "Flush",
            Ranking::FullHouse => "FullHouse",
            Ranking::FourOAK => "FourOfAKind",
            Ranking::StraightFlush => "StraightFlush",
        };
        f.pad(name)
    }
}
