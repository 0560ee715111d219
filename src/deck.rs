//! The single deck used for one round.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::{DeckBuildError, DeckError};

/// Undealt cards for one round.
///
/// Cards are drawn from the end of the internal vector, so a shuffled deck
/// yields each remaining card with equal probability.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck shuffled with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck that deals `draws` in the given order.
    ///
    /// Useful for replaying a known round. `draws` may hold fewer than 52
    /// cards, but each must be a standard card and appear at most once.
    ///
    /// # Errors
    ///
    /// Returns [`DeckBuildError::InvalidRank`] for a rank outside 1..=13 and
    /// [`DeckBuildError::DuplicateCard`] for the second copy of a card.
    pub fn from_draw_order(draws: &[Card]) -> Result<Self, DeckBuildError> {
        for (i, card) in draws.iter().enumerate() {
            if !card.has_standard_rank() {
                return Err(DeckBuildError::InvalidRank(*card));
            }
            if draws[..i].contains(card) {
                return Err(DeckBuildError::DuplicateCard(*card));
            }
        }

        let mut cards = draws.to_vec();
        cards.reverse();
        Ok(Self { cards })
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
