//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All four suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Spades, Self::Diamonds, Self::Hearts];

    const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Spades => 'S',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// count as zero when evaluating a hand and are refused by
    /// [`Deck::from_draw_order`](crate::Deck::from_draw_order).
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the rank is one of the thirteen standard ranks.
    #[must_use]
    pub const fn has_standard_rank(&self) -> bool {
        matches!(self.rank, 1..=13)
    }

    /// Returns whether this card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Base value of the card: Ace 11, face cards 10, otherwise the pip count.
    #[must_use]
    pub const fn base_value(&self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => f.write_str("A")?,
            11 => f.write_str("J")?,
            12 => f.write_str("Q")?,
            13 => f.write_str("K")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, "{}", self.suit.letter())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
