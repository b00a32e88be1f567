use serde::{Deserialize, Serialize};

use crate::{Card, CardsSet};

/// Who controls a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Computer,
}

impl PlayerKind {
    pub fn opponent(self) -> Self {
        match self {
            PlayerKind::Human => PlayerKind::Computer,
            PlayerKind::Computer => PlayerKind::Human,
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Computer => write!(f, "computer"),
        }
    }
}

/// A player and the cards in their hand.
#[derive(Clone, Debug)]
pub struct Player {
    pub kind: PlayerKind,
    hand: CardsSet,
}

impl Player {
    pub fn new(kind: PlayerKind) -> Self {
        Self {
            kind,
            hand: CardsSet::new(),
        }
    }

    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(card)
    }

    /// Returns `false` if the card was not in the hand.
    pub fn remove_card(&mut self, card: Card) -> bool {
        let held = self.hand.contains(card);
        self.hand = self.hand.remove(card);
        held
    }

    pub fn add_card(&mut self, card: Card) {
        debug_assert!(!self.hand.contains(card), "{} dealt twice", card);
        self.hand = self.hand.insert(card);
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len() as usize
    }

    /// A copy of the hand.
    pub fn hand(&self) -> CardsSet {
        self.hand
    }
}
