use crate::{CardsSet, Game, PlayerKind};

/// Renders a hand as a comma-separated list of card tokens.
pub fn list_cards(hand: CardsSet) -> String {
    let tokens: Vec<String> = hand.into_iter().map(|card| card.to_string()).collect();
    format!("Available cards: {}", tokens.join(", "))
}

/// What the human gets to see before each prompt: the top card, the color
/// that has to be followed (if a color changer set one) and their own hand.
pub fn visualize_table(game: &Game) -> String {
    let mut result = format!("Last played card:\t{}", game.top_card());
    if let Some(color) = game.effects().desired_color {
        result += &format!("\nCurrent color: {}", color);
    }
    result += "\n";
    result += &list_cards(game.player(PlayerKind::Human).hand());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{all_cards, card, Color};

    #[test]
    fn table_shows_top_card_color_and_hand() {
        let mut supply = Vec::from(all_cards());
        // Deal lm to the human and turn up l9
        supply.swap(0, 6);
        supply.swap(8, 3);
        let mut game = Game::new(supply);
        assert_eq!(
            visualize_table(&game),
            "Last played card:\tl9\nAvailable cards: l7, l10, lk, lm"
        );
        game.play_card(PlayerKind::Human, card!("lm"), Some(Color::Hearts))
            .unwrap();
        assert_eq!(
            visualize_table(&game),
            "Last played card:\tlm\nCurrent color: c\nAvailable cards: l7, l10, lk"
        );
    }
}
