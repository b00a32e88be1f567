mod command;
mod recording;
mod session;

pub use command::*;
pub use recording::*;
pub use session::*;

use prsi_ai::Difficulty;

/// Everything a session needs besides the game and the console.
pub struct Config {
    pub difficulty: Difficulty,
    pub recorder: Option<Recorder>,
}
