use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A card of the 32-card German-suited pack.
///
/// Cards are ordered by color first, then by rank, which is also the order of
/// [`all_cards()`] and of iterating a [`CardsSet`](crate::CardsSet).
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub rank: Rank,
}

/// The color (suit) of a [card](Card).
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    #[serde(rename = "l")]
    Leaves,
    #[serde(rename = "k")]
    Bells,
    #[serde(rename = "c")]
    Hearts,
    #[serde(rename = "z")]
    Acorns,
}

/// The rank of a [card](Card).
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    /// Blocks the next player until they answer with another ace or stand.
    #[serde(rename = "a")]
    Ace,
    /// Makes the next player draw two more cards unless they answer with a seven.
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "k")]
    King,
    /// The color changer. Playable on anything, and picks the color to follow.
    #[serde(rename = "m")]
    Changer,
    #[serde(rename = "s")]
    Upper,
}

pub const COLORS: [Color; 4] = [Color::Leaves, Color::Bells, Color::Hearts, Color::Acorns];

pub const RANKS: [Rank; 8] = [
    Rank::Ace,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::King,
    Rank::Changer,
    Rank::Upper,
];

/// Number of cards in the pack.
pub const NUM_CARDS: usize = COLORS.len() * RANKS.len();

/// Every card of the pack exactly once, in canonical order.
pub fn all_cards() -> [Card; NUM_CARDS] {
    std::array::from_fn(|idx| Card::from_index(idx as u8))
}

impl Card {
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// Position of this card in the canonical order, in `0..32`.
    pub fn to_index(self) -> u8 {
        self.color as u8 * RANKS.len() as u8 + self.rank as u8
    }

    /// Inverse of [`Card::to_index()`].
    ///
    /// Panics if `idx` is not below 32.
    pub fn from_index(idx: u8) -> Self {
        let idx = usize::from(idx);
        Self {
            color: COLORS[idx / RANKS.len()],
            rank: RANKS[idx % RANKS.len()],
        }
    }
}

impl Color {
    pub fn letter(self) -> char {
        match self {
            Color::Leaves => 'l',
            Color::Bells => 'k',
            Color::Hearts => 'c',
            Color::Acorns => 'z',
        }
    }
}

impl Rank {
    pub fn token(self) -> &'static str {
        match self {
            Rank::Ace => "a",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::King => "k",
            Rank::Changer => "m",
            Rank::Upper => "s",
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color, self.rank)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// The error type for the [`FromStr`] instances of [`Card`] and [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    Empty,
    InvalidColor,
    InvalidRank,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::Empty => write!(f, "No card given"),
            CardFromStrErr::InvalidColor => {
                write!(f, "Invalid color, expected one of l, k, c, z")
            }
            CardFromStrErr::InvalidRank => {
                write!(f, "Invalid rank, expected one of a, 7, 8, 9, 10, k, m, s")
            }
        }
    }
}

impl FromStr for Color {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(CardFromStrErr::Empty),
            "l" => Ok(Color::Leaves),
            "k" => Ok(Color::Bells),
            "c" => Ok(Color::Hearts),
            "z" => Ok(Color::Acorns),
            _ => Err(CardFromStrErr::InvalidColor),
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let color_char = chars.next().ok_or(CardFromStrErr::Empty)?;
        let color = match color_char {
            'l' => Color::Leaves,
            'k' => Color::Bells,
            'c' => Color::Hearts,
            'z' => Color::Acorns,
            _ => return Err(CardFromStrErr::InvalidColor),
        };
        let rank = match chars.as_str() {
            "a" => Rank::Ace,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "k" => Rank::King,
            "m" => Rank::Changer,
            "s" => Rank::Upper,
            _ => return Err(CardFromStrErr::InvalidRank),
        };
        Ok(Card { color, rank })
    }
}

/// Shorthand for creating cards from their token.
///
/// The first character is the [color](Color) (`l`, `k`, `c` or `z`), the
/// rest is the [rank](Rank) (`a`, `7`, `8`, `9`, `10`, `k`, `m` or `s`).
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use prsi::{card, Card, Color, Rank};
/// assert_eq!(
///     card!("z10"),
///     Card { color: Color::Acorns, rank: Rank::Ten }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($token:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($token)
            .expect("Invalid card token given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;
