use super::evaluation::{Evaluation, Variant};
use super::evaluator::{Evaluator, bit, msb};
use super::lookup;
use super::ranking::Ranking;

/// cheap structural reads, mostly for drawing decisions
impl Evaluator {
    /// pairing structure only: category and the paired ranks, no kickers.
    /// straights and flushes are not looked for
    pub fn pairing(&self) -> Evaluation {
        let [_, twos, tres, four] = self.hand().rank_groups();
        let made = if !self.is_paired() {
            (Ranking::HighCard, 0, 0, 0)
        } else if !self.is_tripped() {
            match twos.count_ones() {
                1 => (Ranking::OnePair, msb(twos), 0, 0),
                _ => {
                    let hi = msb(twos);
                    (Ranking::TwoPair, hi, msb(twos & !bit(hi)), 0)
                }
            }
        } else if four != 0 {
            (Ranking::FourOAK, msb(four), 0, 0)
        } else {
            let trips = msb(tres);
            match twos & !bit(trips) {
                0 => (Ranking::ThreeOAK, trips, 0, 0),
                pairs => (Ranking::FullHouse, trips, msb(pairs), 0),
            }
        };
        Evaluation::high(Variant::High, made)
    }
    /// cards that complete a straight on the next draw.
    ///
    /// every missing rank that makes a straight alone is worth its four
    /// cards. failing any, a runner-runner draw is worth 1. a hand that
    /// already holds a straight has no outs.
    pub fn straight_outs(&self) -> usize {
        let ranks = self.hand().rank_mask();
        if lookup::straight(ranks).is_some() {
            return 0;
        }
        let missing = || (0..13u8).map(bit).filter(move |b| ranks & b == 0);
        let singles = missing()
            .filter(|b| lookup::straight(ranks | b).is_some())
            .count();
        if singles > 0 {
            return 4 * singles;
        }
        let doubles = missing()
            .flat_map(|a| missing().filter(move |b| a < *b).map(move |b| a | b))
            .any(|ab| lookup::straight(ranks | ab).is_some());
        match doubles {
            true => 1,
            false => 0,
        }
    }

    pub(crate) fn is_paired(&self) -> bool {
        self.hand().count_max_rank() >= 2
    }
    pub(crate) fn is_tripped(&self) -> bool {
        self.hand().count_max_rank() >= 3
    }
}
