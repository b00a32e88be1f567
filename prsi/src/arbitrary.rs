use crate::{Card, Color, Rank, COLORS, RANKS};

impl quickcheck::Arbitrary for Color {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&COLORS).unwrap()
    }
}

impl quickcheck::Arbitrary for Rank {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&RANKS).unwrap()
    }
}

impl quickcheck::Arbitrary for Card {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            color: Color::arbitrary(g),
            rank: Rank::arbitrary(g),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Shrink towards the first card of the pack
        let idx = self.to_index();
        Box::new((0..idx).rev().take(1).map(Card::from_index))
    }
}

/// A shuffled pack, for driving whole games in property tests.
#[derive(Clone, Debug)]
pub struct ShuffledPack(pub Vec<Card>);

impl quickcheck::Arbitrary for ShuffledPack {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut remaining = Vec::from(crate::all_cards());
        let mut pack = Vec::with_capacity(remaining.len());
        while !remaining.is_empty() {
            let idx = usize::arbitrary(g) % remaining.len();
            pack.push(remaining.swap_remove(idx));
        }
        ShuffledPack(pack)
    }
}
