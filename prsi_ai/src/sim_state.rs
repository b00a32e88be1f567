use prsi::{Card, CardsSet, Color, Game, PlayerKind, Rank, COLORS};

/// A card to play, plus the color to switch to if it is a color changer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub card: Card,
    pub color: Option<Color>,
}

impl Move {
    pub fn plain(card: Card) -> Self {
        Self { card, color: None }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color {
            Some(color) => write!(f, "{} (switching to {})", self.card, color),
            None => write!(f, "{}", self.card),
        }
    }
}

/// The part of a game the search looks at.
///
/// The computer is the maximizing side, the human the minimizing one. Both
/// hands are copies, so searching never touches the real game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimState {
    pub computer: CardsSet,
    pub human: CardsSet,
    /// The top card, except after a color changer: then it is the changer of
    /// the chosen color, so that matching its color is all that is needed.
    pub top_card: Card,
    /// Whether the top card is an ace or seven that has not been answered yet.
    pub effect_active: bool,
}

impl SimState {
    /// The state of `game` as seen by the computer, assuming the human holds `human`.
    pub fn from_game(game: &Game, human: CardsSet) -> Self {
        let effects = game.effects();
        let physical = game.top_card();
        let top_card = match (physical.rank, effects.desired_color) {
            (Rank::Changer, Some(color)) => Card::new(color, Rank::Changer),
            _ => physical,
        };
        Self {
            computer: game.player(PlayerKind::Computer).hand(),
            human,
            top_card,
            effect_active: effects.active.is_some(),
        }
    }

    pub fn hand(&self, maximizing: bool) -> CardsSet {
        if maximizing {
            self.computer
        } else {
            self.human
        }
    }

    /// Whether the side to move is blocked by an ace it cannot answer.
    pub fn facing_active_ace(&self) -> bool {
        self.effect_active && self.top_card.rank == Rank::Ace
    }

    /// All moves of the side to move, in canonical card order.
    ///
    /// A color changer yields one move per color. For the computer, only the
    /// colors of its other cards are tried, unless it has none of those.
    pub fn valid_moves(&self, maximizing: bool) -> Vec<Move> {
        let hand = self.hand(maximizing);
        let playable = match (self.effect_active, self.top_card.rank) {
            (true, Rank::Seven) => hand.with_rank(Rank::Seven),
            (true, Rank::Ace) => hand.with_rank(Rank::Ace),
            _ => hand
                .into_iter()
                .filter(|&card| is_playable_sim(card, self.top_card))
                .collect(),
        };

        let mut moves = Vec::new();
        for card in playable {
            if card.rank != Rank::Changer {
                moves.push(Move::plain(card));
                continue;
            }
            let mut colors = Vec::from(COLORS);
            if maximizing {
                let others = hand.remove(card) & !hand.with_rank(Rank::Changer);
                if !others.is_empty() {
                    colors = others.colors();
                }
            }
            moves.extend(colors.into_iter().map(|color| Move {
                card,
                color: Some(color),
            }));
        }
        moves
    }

    /// The state after the side to move plays `mv`.
    pub fn apply(&self, mv: Move, maximizing: bool) -> Self {
        let mut next = *self;
        if maximizing {
            next.computer = self.computer.remove(mv.card);
        } else {
            next.human = self.human.remove(mv.card);
        }
        next.top_card = match (mv.card.rank, mv.color) {
            (Rank::Changer, Some(color)) => Card::new(color, Rank::Changer),
            _ => mv.card,
        };
        next.effect_active = matches!(mv.card.rank, Rank::Ace | Rank::Seven);
        next
    }

    /// The state after the side to move stands against an ace.
    pub fn stand(&self) -> Self {
        Self {
            effect_active: false,
            ..*self
        }
    }

    /// The computer wants a small hand, the human a big one.
    pub fn evaluate(&self) -> i32 {
        self.human.len() as i32 - self.computer.len() as i32
    }
}

/// The legality rule without any effects; a changer on top only asks for its color.
pub fn is_playable_sim(card: Card, top_card: Card) -> bool {
    if top_card.rank == Rank::Changer {
        return card.color == top_card.color || card.rank == Rank::Changer;
    }
    card.color == top_card.color || card.rank == top_card.rank || card.rank == Rank::Changer
}
