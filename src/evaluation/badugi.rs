use super::evaluation::Evaluation;
use super::evaluator::Evaluator;
use super::lowball::ace_low;
use crate::cards::Hand;

impl Evaluator {
    /// largest set of cards with no shared rank and no shared suit,
    /// ties going to the lowest ranks with the ace low
    pub fn badugi(&self) -> Evaluation {
        let hand = self.hand();
        (1..=hand.size().min(4))
            .rev()
            .find_map(|k| {
                hand.subsets(k)
                    .filter(Self::is_badugi)
                    .map(|cards| ace_low(cards.rank_mask()))
                    .min()
                    .map(|ranks| Evaluation::badugi(k, ranks))
            })
            .unwrap_or(Evaluation::NULL)
    }
    fn is_badugi(hand: &Hand) -> bool {
        hand.count_ranks() == hand.size() && hand.count_suits() == hand.size()
    }
}
