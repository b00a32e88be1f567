use std::collections::HashMap;
use std::str::FromStr;

use itertools::{Either, Itertools};
use prsi::{Card, CardsSet, Game, PlayerKind};
use tracing::debug;

use crate::{search, Move, SimState, SEARCH_DEPTH};

/// How well the computer plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    /// Votes over every hand the human could be holding.
    Easy,
    /// Searches with the human's actual hand.
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" | "easy" | "e" => Ok(Difficulty::Easy),
            "Hard" | "hard" | "h" => Ok(Difficulty::Hard),
            _ => Err(format!("Unknown difficulty '{}', expected easy or hard", s)),
        }
    }
}

/// The hands the search assumes the human might hold.
///
/// On [`Difficulty::Hard`] that is just the real hand. On [`Difficulty::Easy`]
/// it is every subset of the human's hand plus the draw pile with as many cards
/// as the human holds, in lexicographic order of the canonical card order.
pub fn human_hand_hypotheses(
    game: &Game,
    difficulty: Difficulty,
) -> impl Iterator<Item = CardsSet> {
    let human = game.player(PlayerKind::Human).hand();
    match difficulty {
        Difficulty::Hard => Either::Left(std::iter::once(human)),
        Difficulty::Easy => {
            let pool = human | game.draw_pile().iter().collect::<CardsSet>();
            let pool: Vec<Card> = pool.into_iter().collect();
            Either::Right(
                pool.into_iter()
                    .combinations(human.len() as usize)
                    .map(CardsSet::from_iter),
            )
        }
    }
}

/// Picks the computer's move, or `None` if it should draw or stand instead.
pub fn choose_move(game: &Game, difficulty: Difficulty) -> Option<Move> {
    let results = human_hand_hypotheses(game, difficulty).map(|human| {
        let (score, mv) = search(&SimState::from_game(game, human), SEARCH_DEPTH, true);
        debug!(?human, score, ?mv, "Searched hypothesis");
        mv
    });
    vote(results)
}

/// The most frequent result. Ties go to the result that came up first.
pub fn vote(results: impl IntoIterator<Item = Option<Move>>) -> Option<Move> {
    // result -> (votes, first seen at)
    let mut tally: HashMap<Option<Move>, (usize, usize)> = HashMap::new();
    let mut num_results = 0;
    for (idx, result) in results.into_iter().enumerate() {
        tally.entry(result).or_insert((0, idx)).0 += 1;
        num_results += 1;
    }
    debug!(num_results, num_distinct = tally.len(), "Counted votes");
    tally
        .into_iter()
        .max_by(|(_, (votes_a, first_a)), (_, (votes_b, first_b))| {
            votes_a.cmp(votes_b).then(first_b.cmp(first_a))
        })
        .and_then(|(result, _)| result)
}
