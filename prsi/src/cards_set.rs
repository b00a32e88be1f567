use std::iter::FusedIterator;

use crate::{Card, Color, Rank};

/// A compact set of [`Card`]s, one bit per card of the pack.
///
/// Allows intersection/union/xor with other such sets via bitwise ops.
/// Also implements [`IntoIterator`], yielding cards in canonical order.
///
/// ```
/// use prsi::{card, CardsSet};
/// let mut set = CardsSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `CardsSet`.
/// set = set.insert(card!("z7"));
/// set = set.insert(card!("z7"));  // Inserting a second time has no effect
/// set = set.insert(card!("l9"));
/// assert_eq!(Vec::from_iter(set), vec![card!("l9"), card!("z7")]);
/// ```
///
/// Being [`Copy`], a set can be handed to a search by value without touching
/// the hand it was taken from.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct CardsSet {
    bits: u32,
}

impl CardsSet {
    /// Creates a new, empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, card: Card) -> bool {
        self.bits & Self::bit(card) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, card: Card) -> Self {
        Self {
            bits: self.bits | Self::bit(card),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, card: Card) -> Self {
        Self {
            bits: self.bits & !Self::bit(card),
        }
    }

    /// The cards of this set that have the given rank.
    pub fn with_rank(self, rank: Rank) -> Self {
        self.into_iter().filter(|card| card.rank == rank).collect()
    }

    /// The distinct colors among the cards of this set, in canonical order.
    pub fn colors(self) -> Vec<Color> {
        let mut colors: Vec<Color> = self.into_iter().map(|card| card.color).collect();
        colors.dedup(); // Iteration is sorted by color first
        colors
    }

    fn bit(card: Card) -> u32 {
        1u32 << card.to_index()
    }
}

macro_rules! set_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $tok:tt) => {
        impl std::ops::$op for CardsSet {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self {
                    bits: self.bits $tok rhs.bits,
                }
            }
        }

        impl std::ops::$assign_op for CardsSet {
            fn $assign_method(&mut self, rhs: Self) {
                *self = std::ops::$op::$method(*self, rhs);
            }
        }
    };
}

set_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
set_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
set_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl std::ops::Not for CardsSet {
    type Output = Self;

    // All 32 bits are cards, so no masking is needed.
    fn not(self) -> Self::Output {
        Self { bits: !self.bits }
    }
}

impl FromIterator<Card> for CardsSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

impl IntoIterator for CardsSet {
    type Item = Card;

    type IntoIter = CardsSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardsSetIter { bits: self.bits }
    }
}

/// Iterator for a [`CardsSet`] that returns cards in canonical order.
#[derive(Clone, Copy, Debug)]
pub struct CardsSetIter {
    bits: u32,
}

impl Iterator for CardsSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        // The number of trailing zeros is the index of the lowest card
        let card_idx = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Card::from_index(card_idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for CardsSetIter {}

impl FusedIterator for CardsSetIter {}
