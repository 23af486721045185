use super::split::Split;
use crate::cards::Hand;
use crate::evaluation::Evaluation;

/// A poker variant, named by the evaluators it uses at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Game {
    Holdem,
    Omaha8,
    Omaha,
    Razz,
    Stud,
    Stud8,
    StudHiLo,
    Draw,
    Lowball,
    KansasCity,
    TripleDraw27,
    TripleDrawA5,
    Badugi,
    ThreeCard,
}

impl Game {
    pub const fn all() -> [Game; 14] {
        [
            Game::Holdem,
            Game::Omaha8,
            Game::Omaha,
            Game::Razz,
            Game::Stud,
            Game::Stud8,
            Game::StudHiLo,
            Game::Draw,
            Game::Lowball,
            Game::KansasCity,
            Game::TripleDraw27,
            Game::TripleDrawA5,
            Game::Badugi,
            Game::ThreeCard,
        ]
    }
    /// one-letter code accepted on the command line
    pub fn code(&self) -> char {
        match self {
            Game::Holdem => 'h',
            Game::Omaha8 => 'o',
            Game::Omaha => 'O',
            Game::Razz => 'r',
            Game::Stud => 's',
            Game::Stud8 => 'e',
            Game::StudHiLo => 'q',
            Game::Draw => 'd',
            Game::Lowball => 'l',
            Game::KansasCity => 'k',
            Game::TripleDraw27 => 't',
            Game::TripleDrawA5 => 'T',
            Game::Badugi => 'b',
            Game::ThreeCard => '3',
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Game::Holdem => "holdem",
            Game::Omaha8 => "omaha8",
            Game::Omaha => "omaha",
            Game::Razz => "razz",
            Game::Stud => "stud",
            Game::Stud8 => "stud8",
            Game::StudHiLo => "stud-hilo",
            Game::Draw => "draw",
            Game::Lowball => "lowball",
            Game::KansasCity => "kansas-city-lowball",
            Game::TripleDraw27 => "triple-draw-27",
            Game::TripleDrawA5 => "triple-draw-a5",
            Game::Badugi => "badugi",
            Game::ThreeCard => "three-card-poker",
        }
    }
    /// pocket cards must be combined with exactly three board cards
    pub fn is_omaha(&self) -> bool {
        matches!(self, Game::Omaha | Game::Omaha8)
    }
    pub fn is_hilo(&self) -> bool {
        matches!(self, Game::Omaha8 | Game::Stud8 | Game::StudHiLo)
    }

    /// reject input the evaluators cannot score
    pub fn check(&self, pocket: &Hand, board: &Hand) -> Result<(), String> {
        if pocket.is_empty() {
            return Err(format!("{} needs at least one pocket card", self));
        }
        if pocket.intersects(board) {
            return Err(format!("pocket {} shares cards with board {}", pocket, board));
        }
        if !self.is_omaha() && pocket.size() + board.size() > 7 {
            return Err(format!(
                "{} plays at most seven cards, got {}",
                self,
                pocket.size() + board.size()
            ));
        }
        Ok(())
    }
    /// score one player's cards at showdown
    pub fn evaluate(&self, pocket: Hand, board: Hand) -> Split {
        let cards = pocket | board;
        match self {
            Game::Holdem | Game::Stud | Game::Draw => Split::high(cards.evaluate_high()),
            Game::Omaha => Split::high(Self::omaha(pocket, board, Hand::evaluate_high)),
            Game::Omaha8 => Split::both(
                Self::omaha(pocket, board, Hand::evaluate_high),
                Self::omaha(pocket, board, Hand::evaluate_8_low_a5),
            ),
            Game::Stud8 => Split::both(cards.evaluate_high(), cards.evaluate_8_low_a5()),
            Game::StudHiLo => Split::both(cards.evaluate_high(), cards.evaluate_low_a5()),
            Game::Razz | Game::Lowball | Game::TripleDrawA5 => Split::low(cards.evaluate_low_a5()),
            Game::KansasCity | Game::TripleDraw27 => Split::low(cards.evaluate_low_2to7()),
            Game::Badugi => Split::low(cards.evaluate_badugi()),
            Game::ThreeCard => Split::high(cards.evaluate_3cp()),
        }
    }

    /// best of every two-pocket, three-board combination
    fn omaha<F>(pocket: Hand, board: Hand, evaluate: F) -> Evaluation
    where
        F: Fn(&Hand) -> Evaluation,
    {
        pocket
            .subsets(pocket.size().min(2))
            .flat_map(|two| {
                board
                    .subsets(board.size().min(3))
                    .map(move |three| two | three)
            })
            .map(|cards| evaluate(&cards))
            .max()
            .unwrap_or(Evaluation::NULL)
    }
}

impl std::str::FromStr for Game {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let game = match (chars.next(), chars.next()) {
            (Some(c), None) => Game::all().into_iter().find(|g| g.code() == c),
            _ => Game::all().into_iter().find(|g| g.name() == s.to_lowercase()),
        };
        game.ok_or_else(|| format!("invalid game: {}", s))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}
