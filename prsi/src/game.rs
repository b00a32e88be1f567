use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::{
    all_cards, is_playable, Card, Color, DiscardPile, DrawPile, Effect, EffectState, IllegalMove,
    Player, PlayerKind, Rank, SupplyExhausted, NUM_CARDS,
};

/// Cards in each hand after dealing.
pub const STARTING_HAND_SIZE: usize = 4;

/// How the game ended, from the human's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Victory,
    Defeat,
}

/// The error type for [`Game::take_card()`].
#[derive(Debug, PartialEq, Eq)]
pub enum DrawError {
    Illegal(IllegalMove),
    SupplyExhausted(SupplyExhausted),
}

impl std::error::Error for DrawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DrawError::Illegal(err) => Some(err),
            DrawError::SupplyExhausted(err) => Some(err),
        }
    }
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::Illegal(_) => write!(f, "Taking a card is not allowed"),
            DrawError::SupplyExhausted(_) => write!(f, "Taking a card failed"),
        }
    }
}

impl From<IllegalMove> for DrawError {
    fn from(err: IllegalMove) -> Self {
        DrawError::Illegal(err)
    }
}

impl From<SupplyExhausted> for DrawError {
    fn from(err: SupplyExhausted) -> Self {
        DrawError::SupplyExhausted(err)
    }
}

/// One game between the human and the computer.
///
/// All 32 cards are always in exactly one of the two hands or two piles.
#[derive(Clone, Debug)]
pub struct Game {
    human: Player,
    computer: Player,
    draw_pile: DrawPile,
    discard_pile: DiscardPile,
    effects: EffectState,
    to_move: PlayerKind,
}

impl Game {
    /// Deals a game from an ordered supply of the whole pack.
    ///
    /// Two cards go to the human, two to the computer, and again, then the next
    /// card is turned up. The human moves first.
    ///
    /// Panics if `supply` is not a permutation of the pack.
    pub fn new(supply: Vec<Card>) -> Self {
        assert_eq!(supply.len(), NUM_CARDS, "The supply must be the whole pack");
        let mut sorted = supply.clone();
        sorted.sort();
        assert!(sorted == all_cards(), "The supply must be the whole pack");

        let mut draw_pile = DrawPile::new(supply);
        let mut human = Player::new(PlayerKind::Human);
        let mut computer = Player::new(PlayerKind::Computer);
        let mut deal = |player: &mut Player| {
            for _ in 0..2 {
                // Can't fail, the pack is much bigger than the two hands
                player.add_card(draw_pile.draw().unwrap());
            }
        };
        for _ in 0..STARTING_HAND_SIZE / 2 {
            deal(&mut human);
            deal(&mut computer);
        }
        let top_card = draw_pile.draw().unwrap();

        Self {
            human,
            computer,
            draw_pile,
            discard_pile: DiscardPile::new(top_card),
            effects: EffectState::default(),
            to_move: PlayerKind::Human,
        }
    }

    /// Deals a game from a freshly shuffled pack.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut supply = Vec::from(all_cards());
        supply.shuffle(rng);
        Self::new(supply)
    }

    pub fn player(&self, kind: PlayerKind) -> &Player {
        match kind {
            PlayerKind::Human => &self.human,
            PlayerKind::Computer => &self.computer,
        }
    }

    fn player_mut(&mut self, kind: PlayerKind) -> &mut Player {
        match kind {
            PlayerKind::Human => &mut self.human,
            PlayerKind::Computer => &mut self.computer,
        }
    }

    pub fn top_card(&self) -> Card {
        self.discard_pile.top()
    }

    pub fn effects(&self) -> &EffectState {
        &self.effects
    }

    pub fn to_move(&self) -> PlayerKind {
        self.to_move
    }

    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    /// Whether an ace is waiting to be answered.
    pub fn ace_is_active(&self) -> bool {
        self.effects.active == Some(Effect::Ace)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.human.hand_size() == 0 {
            Some(GameOutcome::Victory)
        } else if self.computer.hand_size() == 0 {
            Some(GameOutcome::Defeat)
        } else {
            None
        }
    }

    /// Whether `card` could be played on the current top card. Does not look at any hand.
    pub fn is_card_playable(&self, card: Card) -> bool {
        is_playable(card, self.top_card(), &self.effects)
    }

    /// Plays `card` from the hand of `player`.
    ///
    /// `color` is the color to switch to and is required when playing a color
    /// changer. It is ignored for other cards. On error, nothing changes.
    pub fn play_card(
        &mut self,
        player: PlayerKind,
        card: Card,
        color: Option<Color>,
    ) -> Result<(), IllegalMove> {
        self.check_may_act(player)?;
        if !self.player(player).has_card(card) {
            return Err(IllegalMove::CardNotInHand { card });
        }
        if !self.is_card_playable(card) {
            return Err(IllegalMove::CardNotPlayable {
                card,
                top_card: self.top_card(),
            });
        }
        let color = match card.rank {
            Rank::Changer => Some(color.ok_or(IllegalMove::MissingColorChoice { card })?),
            _ => None,
        };

        self.player_mut(player).remove_card(card);
        self.discard_pile.push(card);
        self.effects.apply_play(card, color);
        trace!(%player, %card, ?color, stacking = self.effects.stacking, "Card played");
        self.end_turn();
        Ok(())
    }

    /// Takes the cards `player` owes: the whole seven stack if a seven is
    /// active, otherwise a single card. Returns how many cards were taken.
    ///
    /// Any active effect ends and the turn passes.
    pub fn take_card(&mut self, player: PlayerKind) -> Result<usize, DrawError> {
        self.check_may_act(player)?;
        if self.ace_is_active() {
            return Err(IllegalMove::MustAnswerAce.into());
        }
        let count = self.effects.cards_to_draw();
        self.forced_draw(player, count)?;
        self.effects.clear_active();
        self.end_turn();
        Ok(count)
    }

    /// Declines to answer an active ace. Passes the turn without drawing.
    pub fn stand_round(&mut self, player: PlayerKind) -> Result<(), IllegalMove> {
        self.check_may_act(player)?;
        if !self.ace_is_active() {
            return Err(IllegalMove::NoAceToStandOn);
        }
        trace!(%player, "Stood a round");
        self.effects.clear_active();
        self.end_turn();
        Ok(())
    }

    /// Moves `count` cards from the draw pile to the hand of `player`.
    fn forced_draw(&mut self, player: PlayerKind, count: usize) -> Result<(), SupplyExhausted> {
        for taken in 0..count {
            if self.draw_pile.is_empty() {
                let reclaimed = self.discard_pile.take_all_but_top();
                trace!(num_cards = reclaimed.len(), "Draw pile replenished");
                self.draw_pile.replenish(reclaimed);
            }
            let card = self.draw_pile.draw().ok_or(SupplyExhausted {
                missing: count - taken,
            })?;
            trace!(%player, %card, "Card taken");
            self.player_mut(player).add_card(card);
        }
        debug_assert_eq!(self.card_count(), NUM_CARDS);
        Ok(())
    }

    fn check_may_act(&self, player: PlayerKind) -> Result<(), IllegalMove> {
        if self.outcome().is_some() {
            Err(IllegalMove::GameOver)
        } else if player != self.to_move {
            Err(IllegalMove::NotYourTurn { player })
        } else {
            Ok(())
        }
    }

    fn end_turn(&mut self) {
        debug_assert_eq!(self.card_count(), NUM_CARDS);
        match self.outcome() {
            Some(outcome) => info!(?outcome, "Game over"),
            None => self.to_move = self.to_move.opponent(),
        }
    }

    /// Total number of cards across both hands and both piles.
    pub fn card_count(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.human.hand_size()
            + self.computer.hand_size()
    }
}
