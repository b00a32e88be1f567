use std::collections::VecDeque;

use crate::Card;

/// The face-down pile players draw from, front first.
#[derive(Clone, Debug, Default)]
pub struct DrawPile {
    cards: VecDeque<Card>,
}

/// The face-up pile of played cards. The last one is the top card.
///
/// Never empty once the game has started.
#[derive(Clone, Debug)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DrawPile {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Puts reclaimed cards at the back of the pile, keeping their order.
    pub fn replenish(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl DiscardPile {
    pub fn new(top_card: Card) -> Self {
        Self {
            cards: vec![top_card],
        }
    }

    pub fn top(&self) -> Card {
        // The constructor puts a card in, and take_all_but_top() leaves one behind.
        self.cards[self.cards.len() - 1]
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes every card except the top one, oldest first.
    pub fn take_all_but_top(&mut self) -> Vec<Card> {
        let top_idx = self.cards.len() - 1;
        self.cards.drain(..top_idx).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    #[test]
    fn draw_pile_is_fifo() {
        let mut pile = DrawPile::new([card!("l7"), card!("k8")]);
        pile.replenish(vec![card!("z9")]);
        assert_eq!(pile.draw(), Some(card!("l7")));
        assert_eq!(pile.draw(), Some(card!("k8")));
        assert_eq!(pile.draw(), Some(card!("z9")));
        assert_eq!(pile.draw(), None);
        assert!(pile.is_empty());
    }

    #[test]
    fn discard_pile_keeps_only_the_top() {
        let mut pile = DiscardPile::new(card!("l7"));
        pile.push(card!("lk"));
        pile.push(card!("zk"));
        assert_eq!(pile.top(), card!("zk"));
        assert_eq!(pile.take_all_but_top(), vec![card!("l7"), card!("lk")]);
        assert_eq!(pile.len(), 1);
        assert_eq!(pile.top(), card!("zk"));
        assert!(pile.take_all_but_top().is_empty());
    }
}
