//! Bitmask card sets and the poker evaluators that run on them.
//!
//! ## Cards
//!
//! - [`Hand`](cards::Hand): an unordered set of cards as a 52-bit mask
//! - [`Permutation`](cards::Permutation): suit relabeling, used to canonize
//!   suit-isomorphic hands onto one representative
//! - [`Hand::colex`](cards::Hand::colex): dense combinadic index for lookup tables
//!
//! ## Evaluation
//!
//! - [`Evaluation`](evaluation::Evaluation): packed, totally ordered hand strength.
//!   Better hands compare greater under every variant, lowball included.
//! - [`Evaluator`](evaluation::Evaluator): high, A-5 low, 2-7 low, badugi,
//!   three-card and draw scoring over a single [`Hand`](cards::Hand)
//!
//! ## Games
//!
//! [`Game`](games::Game) dispatches a pocket and board to the evaluators a
//! particular poker variant uses at showdown.
pub mod cards;
pub mod evaluation;
pub mod games;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
