use super::hand::Hand;
use super::permutation::Permutation;
use super::suit::Suit;

/// many Hands are strategically equivalent, differing only by a
/// relabeling of suits. canonization picks one representative per class
/// so that tables can be indexed by the class rather than the Hand.
impl Hand {
    /// the representative of this Hand's suit-isomorphism class.
    ///
    /// suits are ranked by card count, then by rank mask, both descending,
    /// and sent in that order to clubs, diamonds, hearts, spades.
    /// idempotent, and invariant under any relabeling of the input.
    pub fn canonize(&self) -> Hand {
        Permutation::from(self).image(self)
    }
    /// canonize relative to another Hand, usually a shared board.
    ///
    /// the suit ranking is decided by `other` first and only tie-broken
    /// by this Hand, so pairs (self, other) and (π self, π other)
    /// land on the same image for every relabeling π.
    pub fn canonize_with(&self, other: &Hand) -> Hand {
        Permutation::from((self, other)).image(self)
    }
    /// whether this Hand is already its own representative
    pub fn is_canonical(&self) -> bool {
        self.canonize() == *self
    }
    /// relabel suits explicitly: clubs go to `c`, diamonds to `d`,
    /// hearts to `h`, spades to `s`.
    ///
    /// # Panics
    /// the four targets must be distinct suits
    pub fn rotate_suits(&self, c: Suit, d: Suit, h: Suit, s: Suit) -> Hand {
        match Permutation::try_from([c, d, h, s]) {
            Ok(permutation) => permutation.image(self),
            Err(e) => panic!("{}", e),
        }
    }
    /// invert suit order in place, {cdhs} -> {shdc}
    pub fn flip_suits(&mut self) {
        *self = Permutation::flip().image(self);
    }
}

/// canonize a hand relative to a board.
/// the permutation that canonizes the board on its own is applied to the hand,
/// so hands that share a board are relabeled consistently with each other.
pub fn canonize_to_board(board: &Hand, hand: &Hand) -> Hand {
    Permutation::from(board).image(hand)
}

/// the permutation carrying `source` onto `dest`, if the two are suit-isomorphic
pub fn find_suit_permutation(source: &Hand, dest: &Hand) -> Option<Permutation> {
    Permutation::find(source, dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn canonize_sorts_by_count() {
        let hand = Hand::from("As Ks Qs 2h 3h Jd");
        assert_eq!(hand.canonize(), Hand::from("Ac Kc Qc 3d 2d Jh"));
    }

    #[test]
    fn canonize_breaks_count_ties_by_ranks() {
        let a = Hand::from("Ac Kd");
        let b = Hand::from("Kc Ad");
        assert_eq!(a.canonize(), b.canonize());
        assert_eq!(a.canonize(), Hand::from("Ac Kd"));
    }

    #[test]
    fn canonize_is_idempotent() {
        for _ in 0..256 {
            let hand = Hand::random();
            let once = hand.canonize();
            assert_eq!(once.canonize(), once);
            assert!(once.is_canonical());
            assert_eq!(once.size(), hand.size());
        }
    }

    #[test]
    fn canonize_is_invariant_under_relabeling() {
        for _ in 0..64 {
            let hand = Hand::random();
            let canon = hand.canonize();
            for permutation in Permutation::exhaust() {
                assert_eq!(permutation.image(&hand).canonize(), canon);
            }
        }
    }

    #[test]
    fn canonize_with_reference_is_invariant() {
        for _ in 0..64 {
            let board = Hand::random();
            let hand = Hand::random() & board.complement();
            let canon = hand.canonize_with(&board);
            for p in Permutation::exhaust() {
                assert_eq!(p.image(&hand).canonize_with(&p.image(&board)), canon);
            }
        }
    }

    #[test]
    fn canonize_with_lets_reference_lead() {
        let board = Hand::from("2h 3h 4h");
        let hand = Hand::from("Ac Ad");
        assert_eq!(hand.canonize_with(&board), Hand::from("Ad Ah"));
        assert_eq!(hand.canonize(), Hand::from("Ac Ad"));
    }

    #[test]
    fn canonize_to_board_follows_board() {
        let board = Hand::from("Ks Qs 2d");
        let hand = Hand::from("As 3d");
        assert_eq!(canonize_to_board(&board, &hand), Hand::from("Ac 3d"));
    }

    #[test]
    fn rotate_explicit() {
        let hand = Hand::from("Ac Kd Qh Js");
        let rotated = hand.rotate_suits(Suit::D, Suit::H, Suit::S, Suit::C);
        assert_eq!(rotated, Hand::from("Ad Kh Qs Jc"));
    }

    #[test]
    #[should_panic]
    fn rotate_rejects_non_permutation() {
        Hand::from("Ac").rotate_suits(Suit::C, Suit::C, Suit::H, Suit::S);
    }

    #[test]
    fn flip_reverses_suits() {
        let mut hand = Hand::from("Ac Kd Qh Js");
        hand.flip_suits();
        assert_eq!(hand, Hand::from("As Kh Qd Jc"));
        hand.flip_suits();
        assert_eq!(hand, Hand::from("Ac Kd Qh Js"));
    }

    #[test]
    fn find_permutation_round_trip() {
        let source = Hand::random();
        let p = Permutation::random();
        let dest = p.image(&source);
        let found = find_suit_permutation(&source, &dest).expect("isomorphic by construction");
        assert_eq!(found.image(&source), dest);
        assert_eq!(find_suit_permutation(&Hand::from("AcAd"), &Hand::from("AcKd")), None);
    }
}
