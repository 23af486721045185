use super::evaluation::{Evaluation, Made, Variant};
use super::evaluator::{Evaluator, bit, msb};
use super::ranking::Ranking;
use crate::cards::{Hand, Rank};

/// A-2-3, the lowest straight when the ace may play low
const WHEEL3: u16 = 0b_1000000000011;

/// three-card hands: straights are rarer than flushes here,
/// and trips are rarer than both
impl Evaluator {
    /// best three cards, ace high only
    pub fn high_three_card(&self) -> Evaluation {
        self.best_three(false)
    }
    /// best three cards, A-2-3 counting as the lowest straight
    pub fn three_card_poker(&self) -> Evaluation {
        self.best_three(true)
    }

    fn best_three(&self, wheel: bool) -> Evaluation {
        let hand = self.hand();
        hand.subsets(hand.size().min(3))
            .map(|three| Self::find_three(three, wheel))
            .map(|made| Evaluation::high(Variant::ThreeCard, made))
            .max()
            .unwrap_or(Evaluation::NULL)
    }
    fn find_three(hand: Hand, wheel: bool) -> Made {
        let [ones, twos, tres, _] = hand.rank_groups();
        let full = hand.size() == 3;
        let flush = full && hand.count_max_suit() == 3;
        let run = match full {
            true => Self::find_run3(ones, wheel),
            false => None,
        };
        match (run, flush) {
            (Some(high), true) => (Ranking::StraightFlush, high, 0, 0),
            _ if tres != 0 => (Ranking::ThreeOAK, msb(tres), 0, 0),
            (Some(high), false) => (Ranking::Straight, high, 0, 0),
            (None, true) => (Ranking::Flush, 0, 0, ones),
            _ if twos != 0 => {
                let pair = msb(twos);
                (Ranking::OnePair, pair, 0, ones & !bit(pair))
            }
            _ => (Ranking::HighCard, 0, 0, ones),
        }
    }
    fn find_run3(ones: u16, wheel: bool) -> Option<u8> {
        let bits = ones & ones << 1 & ones << 2;
        if bits != 0 {
            Some(msb(bits))
        } else if wheel && WHEEL3 == (WHEEL3 & ones) {
            Some(u8::from(Rank::Three))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three(s: &str) -> Evaluation {
        Hand::from(s).evaluate_high_three_card()
    }
    fn tcp(s: &str) -> Evaluation {
        Hand::from(s).evaluate_3cp()
    }

    #[test]
    fn category_order() {
        let ladder = [
            "As Kh 9d", "2s 2h 3d", "2s 5s 9s", "2s 3h 4d", "2s 2h 2d", "2s 3s 4s",
        ];
        let evals = ladder.map(three);
        assert!(evals.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(evals[2].ranking(), Some(Ranking::Flush));
        assert_eq!(evals[3].ranking(), Some(Ranking::Straight));
        assert_eq!(evals[5].ranking(), Some(Ranking::StraightFlush));
        assert!(evals.iter().all(|e| e.variant() == Some(Variant::ThreeCard)));
    }

    #[test]
    fn ace_low_straight_only_in_3cp() {
        assert_eq!(three("As 2h 3d").ranking(), Some(Ranking::HighCard));
        assert_eq!(tcp("As 2h 3d").ranking(), Some(Ranking::Straight));
        assert_eq!(tcp("As 2h 3d").major(), Some(Rank::Three));
        assert!(tcp("As 2h 3d") < tcp("2s 3h 4d"));
        assert_eq!(three("Qs Kh Ad").ranking(), Some(Ranking::Straight));
        assert_eq!(tcp("Qs Kh Ad"), three("Qs Kh Ad"));
    }

    #[test]
    fn best_three_of_more() {
        assert_eq!(three("As Ah Kd 2c 2d"), three("As Ah Kd"));
        assert_eq!(three("2s 3s 4s 9h Kd"), three("2s 3s 4s"));
        assert_eq!(three("7s 7h 7d 7c").ranking(), Some(Ranking::ThreeOAK));
    }

    #[test]
    fn pair_kicker() {
        assert!(three("9s 9h Ad") > three("9s 9h Kd"));
        assert!(three("Ts Th 2d") > three("9s 9h Ad"));
    }
}
