use super::evaluation::{Evaluation, Made, Variant};
use super::lookup;
use super::ranking::Ranking;
use crate::cards::{Hand, Rank, Suit};

/// A lazy evaluator for a hand's strength.
///
/// Every variant works from the same compact view of the Hand: four
/// 13-bit suit lanes and the rank-multiplicity groups derived from them.
/// Categories are searched from strongest to weakest with bitwise
/// operations, no table larger than the straight lookup is consulted.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        assert!((1..=7).contains(&h.size()), "evaluators take one to seven cards");
        Self(h)
    }
}

impl Evaluator {
    pub fn hand(&self) -> Hand {
        self.0
    }
    /// best five-card high hand
    pub fn high(&self) -> Evaluation {
        self.high_flush().max(self.high_ranks())
    }
    /// best high hand ignoring suits entirely
    pub fn high_ranks(&self) -> Evaluation {
        Evaluation::high(Variant::High, Self::find_ranking(self.0.rank_groups(), true))
    }
    /// best flush or straight flush, NULL without five suited cards
    pub fn high_flush(&self) -> Evaluation {
        Suit::all()
            .into_iter()
            .map(|suit| self.0.suit_mask(suit))
            .filter_map(|lane| Self::find_flush(lane, true))
            .map(|made| Evaluation::high(Variant::High, made))
            .max()
            .unwrap_or(Evaluation::NULL)
    }

    /// strongest category reachable from rank multiplicities alone.
    /// `wheel` decides whether A-2-3-4-5 plays as a straight.
    pub(crate) fn find_ranking(groups: [u16; 4], wheel: bool) -> Made {
        None.or_else(|| Self::find_4_oak(groups))
            .or_else(|| Self::find_3_oak_2_oak(groups))
            .or_else(|| Self::find_straight(groups, wheel))
            .or_else(|| Self::find_3_oak(groups))
            .or_else(|| Self::find_2_oak_2_oak(groups))
            .or_else(|| Self::find_2_oak(groups))
            .or_else(|| Self::find_1_oak(groups))
            .expect("at least one card in Hand")
    }
    /// flush within a single suit lane
    pub(crate) fn find_flush(lane: u16, wheel: bool) -> Option<Made> {
        if lane.count_ones() < 5 {
            return None;
        }
        Some(match Self::find_run(lane, wheel) {
            Some(high) => (Ranking::StraightFlush, u8::from(high), 0, 0),
            None => (Ranking::Flush, 0, 0, top(lane, 5)),
        })
    }

    fn find_1_oak([ones, _, _, _]: [u16; 4]) -> Option<Made> {
        (ones != 0).then(|| (Ranking::HighCard, 0, 0, top(ones, 5)))
    }
    fn find_2_oak([ones, twos, _, _]: [u16; 4]) -> Option<Made> {
        (twos != 0).then(|| {
            let pair = msb(twos);
            (Ranking::OnePair, pair, 0, top(ones & !bit(pair), 3))
        })
    }
    fn find_2_oak_2_oak([ones, twos, _, _]: [u16; 4]) -> Option<Made> {
        (twos.count_ones() >= 2).then(|| {
            let hi = msb(twos);
            let lo = msb(twos & !bit(hi));
            (Ranking::TwoPair, hi, lo, top(ones & !bit(hi) & !bit(lo), 1))
        })
    }
    fn find_3_oak([ones, _, tres, _]: [u16; 4]) -> Option<Made> {
        (tres != 0).then(|| {
            let trips = msb(tres);
            (Ranking::ThreeOAK, trips, 0, top(ones & !bit(trips), 2))
        })
    }
    fn find_3_oak_2_oak([_, twos, tres, _]: [u16; 4]) -> Option<Made> {
        if tres == 0 {
            return None;
        }
        let trips = msb(tres);
        let pairs = twos & !bit(trips);
        (pairs != 0).then(|| (Ranking::FullHouse, trips, msb(pairs), 0))
    }
    fn find_4_oak([ones, _, _, four]: [u16; 4]) -> Option<Made> {
        (four != 0).then(|| {
            let quads = msb(four);
            (Ranking::FourOAK, quads, 0, top(ones & !bit(quads), 1))
        })
    }
    fn find_straight([ones, _, _, _]: [u16; 4], wheel: bool) -> Option<Made> {
        Self::find_run(ones, wheel).map(|high| (Ranking::Straight, u8::from(high), 0, 0))
    }
    fn find_run(ranks: u16, wheel: bool) -> Option<Rank> {
        match wheel {
            true => lookup::straight(ranks),
            false => lookup::scan(ranks, false),
        }
    }
}

pub(crate) fn bit(index: u8) -> u16 {
    1 << index
}
/// index of the highest set bit, mask must be non-zero
pub(crate) fn msb(mask: u16) -> u8 {
    debug_assert!(mask != 0);
    (15 - mask.leading_zeros()) as u8
}
/// index of the lowest set bit, mask must be non-zero
pub(crate) fn lsb(mask: u16) -> u8 {
    debug_assert!(mask != 0);
    mask.trailing_zeros() as u8
}
/// keep the n highest set bits
pub(crate) fn top(mut mask: u16, n: usize) -> u16 {
    while mask.count_ones() as usize > n {
        mask &= mask - 1;
    }
    mask
}
/// keep the n lowest set bits
pub(crate) fn bottom(mut mask: u16, n: usize) -> u16 {
    let mut kept = 0;
    for _ in 0..n {
        if mask == 0 {
            break;
        }
        let low = mask & mask.wrapping_neg();
        kept |= low;
        mask ^= low;
    }
    kept
}

/// evaluation entry points on the card set itself
impl Hand {
    pub fn evaluate_high(&self) -> Evaluation {
        Evaluator::from(*self).high()
    }
    pub fn evaluate_high_ranks(&self) -> Evaluation {
        Evaluator::from(*self).high_ranks()
    }
    pub fn evaluate_high_flush(&self) -> Evaluation {
        Evaluator::from(*self).high_flush()
    }
    pub fn evaluate_high_three_card(&self) -> Evaluation {
        Evaluator::from(*self).high_three_card()
    }
    pub fn evaluate_3cp(&self) -> Evaluation {
        Evaluator::from(*self).three_card_poker()
    }
    pub fn evaluate_low_a5(&self) -> Evaluation {
        Evaluator::from(*self).low_a5()
    }
    pub fn evaluate_8_low_a5(&self) -> Evaluation {
        Evaluator::from(*self).low_8_a5()
    }
    pub fn evaluate_low_2to7(&self) -> Evaluation {
        Evaluator::from(*self).low_2to7()
    }
    pub fn evaluate_ranks_low_2to7(&self) -> Evaluation {
        Evaluator::from(*self).ranks_low_2to7()
    }
    pub fn evaluate_suits_low_2to7(&self) -> Evaluation {
        Evaluator::from(*self).suits_low_2to7()
    }
    pub fn evaluate_badugi(&self) -> Evaluation {
        Evaluator::from(*self).badugi()
    }
    pub fn evaluate_pairing(&self) -> Evaluation {
        Evaluator::from(*self).pairing()
    }
    pub fn evaluate_straight_outs(&self) -> usize {
        Evaluator::from(*self).straight_outs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::evaluation::Kickers;

    fn high(s: &str) -> Evaluation {
        Hand::from(s).evaluate_high()
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        let eval = high("As Kh Qd Jc 9s");
        assert_eq!(eval.ranking(), Some(Ranking::HighCard));
        assert_eq!(eval.major(), None);
        assert_eq!(eval.kickers(), Kickers::from(vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[rustfmt::skip]
    #[test]
    fn one_pair() {
        let eval = high("As Ah Kd Qc Js");
        assert_eq!(eval.ranking(), Some(Ranking::OnePair));
        assert_eq!(eval.major(), Some(Rank::Ace));
        assert_eq!(eval.kickers(), Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let eval = high("As Ah Kd Kc Qs");
        assert_eq!(eval.ranking(), Some(Ranking::TwoPair));
        assert_eq!(eval.major(), Some(Rank::Ace));
        assert_eq!(eval.minor(), Some(Rank::King));
        assert_eq!(eval.kickers(), Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_pair_keeps_best_kicker() {
        let eval = high("As Ah Kd Kc Qs Qh 2c");
        assert_eq!(eval.ranking(), Some(Ranking::TwoPair));
        assert_eq!(eval.kickers(), Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let eval = high("As Ah Ad Kc Qs");
        assert_eq!(eval.ranking(), Some(Ranking::ThreeOAK));
        assert_eq!(eval.major(), Some(Rank::Ace));
        assert_eq!(eval.kickers(), Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let eval = high("Ts Jh Qd Kc As");
        assert_eq!(eval.ranking(), Some(Ranking::Straight));
        assert_eq!(eval.major(), Some(Rank::Ace));
        assert!(eval.kickers().is_empty());
    }

    #[test]
    fn wheel() {
        let eval = high("As 2h 3d 4c 5s");
        assert_eq!(eval.ranking(), Some(Ranking::Straight));
        assert_eq!(eval.major(), Some(Rank::Five));
        assert!(eval < high("2s 3h 4d 5c 6s"));
    }

    #[test]
    fn flush() {
        let eval = high("As Ks Qs Js 9s 8s 2h");
        assert_eq!(eval.ranking(), Some(Ranking::Flush));
        assert_eq!(
            eval.kickers(),
            Kickers::from(vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine])
        );
    }

    #[test]
    fn full_house() {
        let eval = high("As Ah Ad Kc Ks");
        assert_eq!(eval.ranking(), Some(Ranking::FullHouse));
        assert_eq!(eval.major(), Some(Rank::Ace));
        assert_eq!(eval.minor(), Some(Rank::King));
    }

    #[test]
    fn two_trips_make_a_full_house() {
        let eval = high("Ks Kh Kd Qc Qs Qh 2c");
        assert_eq!(eval.ranking(), Some(Ranking::FullHouse));
        assert_eq!(eval.major(), Some(Rank::King));
        assert_eq!(eval.minor(), Some(Rank::Queen));
    }

    #[test]
    fn four_oak() {
        let eval = high("As Ah Ad Ac Ks");
        assert_eq!(eval.ranking(), Some(Ranking::FourOAK));
        assert_eq!(eval.major(), Some(Rank::Ace));
        assert_eq!(eval.kickers(), Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let eval = high("Ts Js Qs Ks As");
        assert_eq!(eval.ranking(), Some(Ranking::StraightFlush));
        assert_eq!(eval.major(), Some(Rank::Ace));
        assert!(high("As 2s 3s 4s 5s") < eval);
    }

    #[test]
    fn category_order() {
        let ladder = [
            "As Kh Qd Jc 9s",
            "2s 2h 3d 4c 5h",
            "2s 2h 3d 3c 4s",
            "2s 2h 2d 3c 4s",
            "As 2h 3d 4c 5s",
            "2s 3s 4s 5s 7s",
            "2s 2h 2d 3c 3s",
            "2s 2h 2d 2c 3s",
            "As 2s 3s 4s 5s",
        ];
        let evals = ladder.map(high);
        assert!(evals.windows(2).all(|w| w[0] < w[1]));
        assert!(evals.iter().all(|e| e.variant() == Some(Variant::High)));
    }

    #[test]
    fn kickers_break_ties() {
        assert!(high("As Ah Kd Qc Js") > high("As Ah Kd Qc Ts"));
        assert!(high("As Kh Qd Jc 9s") > high("As Kh Qd Jc 8s"));
        assert_eq!(high("As Ah Kd Qc Js"), high("Ac Ad Ks Qh Jd"));
    }

    #[test]
    fn seven_cards_use_best_five() {
        assert_eq!(high("As Ah Kd Qc Js 3c 2d"), high("As Ah Kd Qc Js"));
        assert_eq!(high("5s 6h 7d 8c 9s Ts Jh"), high("7d 8c 9s Ts Jh"));
    }

    #[test]
    fn high_is_max_of_flush_and_ranks() {
        let mut deck = Deck::new();
        for _ in 0..512 {
            if deck.size() < 7 {
                deck = Deck::new();
            }
            let hand = deck.deal(7);
            let eval = Evaluator::from(hand);
            assert_eq!(eval.high(), eval.high_flush().max(eval.high_ranks()));
            assert!(eval.high() >= eval.high_ranks());
        }
    }

    #[test]
    fn flush_needs_five_suited() {
        assert!(Hand::from("As Ks Qs Js 2h").evaluate_high_flush().is_null());
        assert!(!Hand::from("As Ks Qs Js 2s").evaluate_high_flush().is_null());
    }

    #[test]
    fn bit_helpers() {
        assert_eq!(top(0b1011_0110, 3), 0b1011_0000);
        assert_eq!(bottom(0b1011_0110, 3), 0b0001_0110);
        assert_eq!(bottom(0b11, 5), 0b11);
        assert_eq!(msb(0b1011_0110), 7);
        assert_eq!(lsb(0b1011_0110), 1);
    }

    #[test]
    #[should_panic(expected = "one to seven cards")]
    fn empty_hand_has_no_low() {
        Hand::empty().evaluate_low_a5();
    }

    #[test]
    #[should_panic(expected = "one to seven cards")]
    fn empty_hand_has_no_three_card_hand() {
        Hand::empty().evaluate_3cp();
    }

    #[test]
    #[should_panic(expected = "one to seven cards")]
    fn eight_cards_are_rejected() {
        Hand::from("As Ks Qs Js Ts 9s 8s 7s").evaluate_high();
    }
}
