//! The card-play rules, as pure functions of the top card and [`EffectState`].

use crate::{Card, Color, Rank};

/// How many cards each seven adds to the stack.
pub const SEVEN_PENALTY: usize = 2;

/// A rank-lock left behind by the last played card.
///
/// While one is active, the next player may only answer with the same rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Ace,
    Seven,
}

/// The rule state that is not visible from the top card alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectState {
    pub active: Option<Effect>,
    /// The color chosen with the last color changer, if that was the last played card.
    pub desired_color: Option<Color>,
    /// Cards owed by the next player who draws instead of answering a seven.
    ///
    /// Only non-zero while a seven is active.
    pub stacking: usize,
}

/// What playing a card does to the [`EffectState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEffect {
    /// Any active effect ends.
    Clear,
    /// The next player must answer with an ace or stand.
    AceBlock,
    /// The stack grows by [`SEVEN_PENALTY`] and the next player must answer with a seven or draw it.
    SevenStack,
    /// The player picks the color the next card has to follow.
    ColorChange,
}

pub fn effect_of(card: Card) -> CardEffect {
    match card.rank {
        Rank::Ace => CardEffect::AceBlock,
        Rank::Seven => CardEffect::SevenStack,
        Rank::Changer => CardEffect::ColorChange,
        _ => CardEffect::Clear,
    }
}

/// Whether `candidate` may be played on `top_card` given the current effects.
pub fn is_playable(candidate: Card, top_card: Card, state: &EffectState) -> bool {
    match state.active {
        Some(Effect::Seven) => candidate.rank == Rank::Seven,
        Some(Effect::Ace) => candidate.rank == Rank::Ace,
        None => {
            candidate.rank == Rank::Changer
                || match state.desired_color {
                    Some(color) => candidate.color == color,
                    None => candidate.color == top_card.color || candidate.rank == top_card.rank,
                }
        }
    }
}

impl EffectState {
    /// Updates the state for `card` having just been played.
    ///
    /// `color` is only used for a color changer; for every other card the
    /// override is cleared.
    pub fn apply_play(&mut self, card: Card, color: Option<Color>) {
        self.desired_color = None;
        match effect_of(card) {
            CardEffect::SevenStack => {
                self.active = Some(Effect::Seven);
                self.stacking += SEVEN_PENALTY;
            }
            CardEffect::AceBlock => {
                self.active = Some(Effect::Ace);
                self.stacking = 0;
            }
            CardEffect::ColorChange => {
                self.clear_active();
                self.desired_color = color;
            }
            CardEffect::Clear => self.clear_active(),
        }
    }

    /// Ends any active effect, e.g. because the player drew or stood instead of answering.
    pub fn clear_active(&mut self) {
        self.active = None;
        self.stacking = 0;
    }

    /// Number of cards a player has to take when drawing now.
    pub fn cards_to_draw(&self) -> usize {
        match self.active {
            Some(Effect::Seven) => self.stacking.max(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    fn with_active(active: Effect) -> EffectState {
        EffectState {
            active: Some(active),
            desired_color: None,
            stacking: if active == Effect::Seven { 2 } else { 0 },
        }
    }

    #[test]
    fn plain_matching() {
        let state = EffectState::default();
        assert!(is_playable(card!("z8"), card!("l8"), &state));
        assert!(is_playable(card!("l9"), card!("l8"), &state));
        assert!(is_playable(card!("cm"), card!("l8"), &state));
        assert!(!is_playable(card!("z9"), card!("l8"), &state));
    }

    #[test]
    fn active_effects_lock_the_rank() {
        let seven = with_active(Effect::Seven);
        assert!(is_playable(card!("k7"), card!("l7"), &seven));
        assert!(!is_playable(card!("lk"), card!("l7"), &seven));
        assert!(!is_playable(card!("lm"), card!("l7"), &seven));

        let ace = with_active(Effect::Ace);
        assert!(is_playable(card!("ka"), card!("la"), &ace));
        assert!(!is_playable(card!("l9"), card!("la"), &ace));
        assert!(!is_playable(card!("lm"), card!("la"), &ace));
    }

    #[test]
    fn desired_color_overrides_top_card() {
        let state = EffectState {
            desired_color: Some(Color::Acorns),
            ..EffectState::default()
        };
        assert!(is_playable(card!("z9"), card!("lm"), &state));
        assert!(is_playable(card!("km"), card!("lm"), &state));
        // Matching the physical top card is not enough
        assert!(!is_playable(card!("l9"), card!("lm"), &state));
    }

    #[test]
    fn sevens_stack_and_other_cards_clear() {
        let mut state = EffectState::default();
        state.apply_play(card!("l7"), None);
        assert_eq!(state.active, Some(Effect::Seven));
        assert_eq!(state.stacking, 2);
        state.apply_play(card!("z7"), None);
        assert_eq!(state.stacking, 4);
        assert_eq!(state.cards_to_draw(), 4);

        state.clear_active();
        assert_eq!(state, EffectState::default());
        assert_eq!(state.cards_to_draw(), 1);

        state.apply_play(card!("cm"), Some(Color::Bells));
        assert_eq!(state.desired_color, Some(Color::Bells));
        assert_eq!(state.active, None);
        state.apply_play(card!("ka"), None);
        assert_eq!(state.active, Some(Effect::Ace));
        assert_eq!(state.desired_color, None);
    }

    #[test]
    fn effects_by_rank() {
        assert_eq!(effect_of(card!("za")), CardEffect::AceBlock);
        assert_eq!(effect_of(card!("z7")), CardEffect::SevenStack);
        assert_eq!(effect_of(card!("zm")), CardEffect::ColorChange);
        assert_eq!(effect_of(card!("zs")), CardEffect::Clear);
    }

    quickcheck::quickcheck! {
        fn no_effect_means_color_rank_or_changer(candidate: Card, top_card: Card) -> bool {
            let expected = candidate.color == top_card.color
                || candidate.rank == top_card.rank
                || candidate.rank == Rank::Changer;
            is_playable(candidate, top_card, &EffectState::default()) == expected
        }
    }
}
