pub mod game;
pub use game::*;

pub mod split;
pub use split::*;
