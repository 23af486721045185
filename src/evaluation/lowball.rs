use super::evaluation::{Evaluation, Made, Variant};
use super::evaluator::{Evaluator, bit, bottom, lsb, msb};
use super::ranking::Ranking;
use crate::cards::{Hand, Rank, Suit};

/// ace through eight once the ace is moved to bit 0
const EIGHT_OR_BETTER: u16 = 0xFF;

/// move the ace from the top of a rank mask to the bottom, so that
/// A-2-3-4-5 occupies bits 0 through 4
pub(crate) fn ace_low(mask: u16) -> u16 {
    (mask << 1 | mask >> 12) & Rank::mask()
}
/// inverse of [`ace_low`]
pub(crate) fn ace_high(mask: u16) -> u16 {
    (mask >> 1 | mask << 12) & Rank::mask()
}

/// lowball: the worst hand by high rules wins
impl Evaluator {
    /// ace-to-five: aces are low, straights and flushes do not count.
    /// fewer than five cards are scored as they stand.
    pub fn low_a5(&self) -> Evaluation {
        Evaluation::low(Variant::LowA5, Self::find_low(self.hand()))
    }
    /// ace-to-five restricted to five distinct ranks eight or lower.
    /// NULL when the hand does not qualify
    pub fn low_8_a5(&self) -> Evaluation {
        let ones = ace_low(self.hand().rank_mask()) & EIGHT_OR_BETTER;
        match ones.count_ones() {
            n if n >= 5 => Evaluation::low(
                Variant::LowA5,
                (Ranking::HighCard, 0, 0, bottom(ones, 5)),
            ),
            _ => Evaluation::NULL,
        }
    }
    /// deuce-to-seven: aces are high, the wheel is not a straight,
    /// and straights and flushes count against the hand
    pub fn low_2to7(&self) -> Evaluation {
        self.best_2to7(|hand| {
            Self::find_suited(hand).or_else(|| Some(Self::find_ranking(hand.rank_groups(), false)))
        })
    }
    /// deuce-to-seven ignoring suits, so flushes never count
    pub fn ranks_low_2to7(&self) -> Evaluation {
        self.best_2to7(|hand| Some(Self::find_ranking(hand.rank_groups(), false)))
    }
    /// deuce-to-seven over flushes only. NULL without five suited cards
    pub fn suits_low_2to7(&self) -> Evaluation {
        self.best_2to7(Self::find_suited)
    }

    /// best low over every five-card subset, or every card when fewer
    fn best_2to7<F>(&self, made: F) -> Evaluation
    where
        F: Fn(Hand) -> Option<Made>,
    {
        let hand = self.hand();
        hand.subsets(hand.size().min(5))
            .filter_map(made)
            .map(|made| Evaluation::low(Variant::Low2to7, made))
            .max()
            .unwrap_or(Evaluation::NULL)
    }
    fn find_suited(hand: Hand) -> Option<Made> {
        Suit::all()
            .into_iter()
            .find_map(|suit| Self::find_flush(hand.suit_mask(suit), false))
    }

    /// ace-to-five classification. with n = min(size, 5) cards to play,
    /// the number of distinct ranks decides how much pairing is forced.
    fn find_low(hand: Hand) -> Made {
        let n = hand.size().min(5);
        let [ones, twos, tres, four] = hand.rank_groups().map(ace_low);
        let distinct = ones.count_ones() as usize;
        if distinct >= n {
            (Ranking::HighCard, 0, 0, bottom(ones, n))
        } else if distinct + 1 == n {
            let pair = lsb(twos);
            (Ranking::OnePair, pair, 0, ones & !bit(pair))
        } else if distinct + 2 == n && twos.count_ones() >= 2 {
            let pairs = bottom(twos, 2);
            let (hi, lo) = (msb(pairs), lsb(pairs));
            (Ranking::TwoPair, hi, lo, ones & !pairs)
        } else if distinct + 2 == n {
            let trips = lsb(tres);
            (Ranking::ThreeOAK, trips, 0, ones & !bit(trips))
        } else {
            Self::find_low_full(ones, twos, tres, four)
        }
    }
    /// two distinct ranks among five cards, or one among four
    fn find_low_full(ones: u16, twos: u16, tres: u16, four: u16) -> Made {
        (0..13u8)
            .filter(|i| tres & bit(*i) != 0)
            .find(|i| twos & !bit(*i) != 0)
            .map(|trips| (Ranking::FullHouse, trips, lsb(twos & !bit(trips)), 0))
            .unwrap_or_else(|| {
                let quads = lsb(four);
                (Ranking::FourOAK, quads, 0, bottom(ones & !bit(quads), 1))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::evaluation::Kickers;

    fn a5(s: &str) -> Evaluation {
        Hand::from(s).evaluate_low_a5()
    }
    fn d7(s: &str) -> Evaluation {
        Hand::from(s).evaluate_low_2to7()
    }

    #[test]
    fn ace_rotation() {
        let wheel = Hand::from("As 2h 3d 4c 5s").rank_mask();
        assert_eq!(ace_low(wheel), 0b11111);
        assert_eq!(ace_high(ace_low(wheel)), wheel);
        assert_eq!(ace_low(u16::from(Rank::King)), 1 << 12);
    }

    #[test]
    fn wheel_is_the_nuts() {
        let wheel = a5("As 2h 3d 4c 5s");
        assert_eq!(wheel.ranking(), Some(Ranking::HighCard));
        assert_eq!(wheel.variant(), Some(Variant::LowA5));
        let mut deck = Deck::new();
        for _ in 0..256 {
            if deck.size() < 5 {
                deck = Deck::new();
            }
            assert!(deck.deal(5).evaluate_low_a5() <= wheel);
        }
    }

    #[test]
    fn lower_highest_card_wins() {
        assert!(a5("As 2h 3d 4c 6s") > a5("As 2h 3d 5c 6s"));
        assert!(a5("As 2h 3d 4c 6s") > a5("2s 3h 4d 5c 6s"));
        assert!(a5("2s 3h 4d 5c 7s") > a5("As 2h 3d 4c 8s"));
        assert!(a5("Ks Qh Jd Tc 8s") > a5("As Ah 2d 3c 4s"));
    }

    #[test]
    fn pairs_rank_below_unpaired() {
        let pair = a5("As Ah 2d 3c 4s");
        assert_eq!(pair.ranking(), Some(Ranking::OnePair));
        assert_eq!(pair.major(), Some(Rank::Ace));
        assert!(pair > a5("2s 2h 3d 4c 5s"));
        assert!(a5("2s 2h 3d 4c 5s") > a5("As Ah 2d 2c 3s"));
        assert!(a5("As Ah 2d 2c 3s") > a5("As Ah Ad 2c 3s"));
        assert!(a5("As Ah Ad 2c 3s") > a5("As Ah Ad 2c 2s"));
        assert!(a5("As Ah Ad 2c 2s") > a5("As Ah Ad Ac 2s"));
    }

    #[test]
    fn seven_cards_play_five() {
        assert_eq!(a5("As 2h 3d 4c 5s Kd Kc"), a5("As 2h 3d 4c 5s"));
        let pair = a5("As Ah Ad 2c 2s 3d 3h");
        assert_eq!(pair.ranking(), Some(Ranking::TwoPair));
        assert_eq!(pair.major(), Some(Rank::Two));
        assert_eq!(pair.minor(), Some(Rank::Ace));
        assert_eq!(pair.kickers(), Kickers::from(vec![Rank::Three]));
    }

    #[test]
    fn short_hands_stand_as_they_are() {
        let two = a5("As 2h");
        assert_eq!(two.ranking(), Some(Ranking::HighCard));
        assert!(two > a5("As 3h"));
        assert_eq!(a5("7s 7h").ranking(), Some(Ranking::OnePair));
    }

    #[test]
    fn eight_or_better() {
        let qualified = Hand::from("As 2h 3d 4c 8s Kd Kc");
        assert_eq!(qualified.evaluate_8_low_a5(), a5("As 2h 3d 4c 8s"));
        assert!(Hand::from("As 2h 3d 4c 9s Kd").evaluate_8_low_a5().is_null());
        assert!(!Hand::from("As Ah 3d 4c 5s 6d").evaluate_8_low_a5().is_null());
        assert!(Hand::from("As Ah 3d 3c 5s 6d 9h").evaluate_8_low_a5().is_null());
        assert!(Hand::from("As 2h 3d 4c").evaluate_8_low_a5().is_null());
    }

    #[test]
    fn deuce_to_seven_nuts() {
        let nuts = d7("2s 3h 4d 5c 7s");
        assert_eq!(nuts.ranking(), Some(Ranking::HighCard));
        assert_eq!(nuts.variant(), Some(Variant::Low2to7));
        assert!(nuts > d7("2s 3h 4d 6c 7s"));
        assert!(d7("As 2h 3d 4c 5s") < d7("Ks Qh Jd Tc 8s"));
        assert_eq!(d7("As 2h 3d 4c 5s").ranking(), Some(Ranking::HighCard));
        assert_eq!(d7("3s 4h 5d 6c 7s").ranking(), Some(Ranking::Straight));
        assert!(d7("2s 3s 4s 5s 7s") < d7("2s 2h 3d 4c 5s"));
    }

    #[test]
    fn deuce_to_seven_picks_best_five() {
        assert_eq!(d7("2s 3h 4d 5c 7s Ks Kh"), d7("2s 3h 4d 5c 7s"));
        assert_eq!(d7("2s 3s 4s 5s 7s 8h"), d7("2s 3s 4s 5s 8h"));
    }

    #[test]
    fn deuce_to_seven_composition() {
        let mut deck = Deck::new();
        for _ in 0..512 {
            if deck.size() < 5 {
                deck = Deck::new();
            }
            let hand = deck.deal(5);
            let eval = Evaluator::from(hand);
            let suits = eval.suits_low_2to7();
            let ranks = eval.ranks_low_2to7();
            assert!(!ranks.is_null());
            let expected = if suits.is_null() { ranks } else { suits };
            assert_eq!(eval.low_2to7(), expected);
        }
    }

    #[test]
    fn suited_lows() {
        assert!(Hand::from("2s 3h 4d 5c 7s").evaluate_suits_low_2to7().is_null());
        let flush = Hand::from("2s 3s 4s 5s 7s Kh");
        assert_eq!(
            flush.evaluate_suits_low_2to7().ranking(),
            Some(Ranking::Flush)
        );
        assert_eq!(
            flush.evaluate_ranks_low_2to7(),
            Hand::from("2s 3s 4s 5s 7h").evaluate_low_2to7()
        );
    }
}
