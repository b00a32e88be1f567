use crate::{Card, PlayerKind};

/// Why a player's action was rejected.
///
/// A rejected action never changes the game, so the caller can simply ask
/// for another one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    GameOver,
    NotYourTurn { player: PlayerKind },
    CardNotInHand { card: Card },
    CardNotPlayable { card: Card, top_card: Card },
    /// A color changer was played without saying which color to switch to.
    MissingColorChoice { card: Card },
    /// Standing is only allowed when answering an active ace.
    NoAceToStandOn,
    /// Under an active ace the player has to answer with an ace or stand.
    MustAnswerAce,
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::GameOver => write!(f, "The game is already over"),
            IllegalMove::NotYourTurn { player } => {
                write!(f, "It is not the {} player's turn", player)
            }
            IllegalMove::CardNotInHand { card } => {
                write!(f, "Tried to play {}, which is not in the player's hand", card)
            }
            IllegalMove::CardNotPlayable { card, top_card } => {
                write!(f, "{} cannot be played on {} right now", card, top_card)
            }
            IllegalMove::MissingColorChoice { card } => {
                write!(f, "{} was played without choosing a color", card)
            }
            IllegalMove::NoAceToStandOn => {
                write!(f, "Standing a round is only allowed against an active ace")
            }
            IllegalMove::MustAnswerAce => {
                write!(f, "Cannot take a card against an active ace, play an ace or stand")
            }
        }
    }
}

/// Both the draw pile and the discard pile below the top card are empty.
///
/// The game cannot continue after this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupplyExhausted {
    /// How many cards were still owed when the supply ran out.
    pub missing: usize,
}

impl std::error::Error for SupplyExhausted {}

impl std::fmt::Display for SupplyExhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No cards left to draw, {} card(s) could not be dealt",
            self.missing
        )
    }
}
