use prsi::{Card, Color, Game, PlayerKind};
use tracing::debug;

use crate::{choose_move, Difficulty};

/// What the computer did on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played { card: Card, color: Option<Color> },
    Drew { count: usize },
    Stood,
}

/// Lets the computer take its turn in `game`.
///
/// Searches for a move and plays it. Without one, the computer stands against
/// an active ace and draws otherwise.
pub fn computer_take_turn(game: &mut Game, difficulty: Difficulty) -> anyhow::Result<TurnOutcome> {
    let outcome = match choose_move(game, difficulty) {
        Some(mv) => {
            game.play_card(PlayerKind::Computer, mv.card, mv.color)?;
            TurnOutcome::Played {
                card: mv.card,
                color: mv.color,
            }
        }
        None if game.ace_is_active() => {
            game.stand_round(PlayerKind::Computer)?;
            TurnOutcome::Stood
        }
        None => {
            let count = game.take_card(PlayerKind::Computer)?;
            TurnOutcome::Drew { count }
        }
    };
    debug!(?difficulty, ?outcome, "Computer turn");
    Ok(outcome)
}
