pub mod badugi;
pub mod draws;
pub mod lowball;
pub mod threecard;

pub mod evaluation;
pub use evaluation::*;

pub mod evaluator;
pub use evaluator::*;

pub mod kickers;
pub use kickers::*;

pub mod lookup;
pub use lookup::straight;

pub mod ranking;
pub use ranking::*;
