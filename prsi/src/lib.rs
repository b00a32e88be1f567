pub use cards::*;
pub use cards_set::*;
pub use errors::*;
pub use game::*;
pub use piles::*;
pub use player::*;
pub use rules::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod cards_set;
mod errors;
mod game;
mod piles;
mod player;
mod rules;
mod visualization;
