mod computer;
mod difficulty;
mod minimax;
mod sim_state;
pub use computer::*;
pub use difficulty::*;
pub use minimax::*;
pub use sim_state::*;
