//! Error types for round operations.

use thiserror::Error;

use crate::card::Card;
use crate::game::RoundState;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards remain in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckBuildError {
    /// A card's rank is outside 1..=13.
    #[error("card rank {} is not a standard rank", .0.rank)]
    InvalidRank(Card),
    /// The same card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck for the initial deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

impl From<DeckError> for DealError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::NotEnoughCards,
        }
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not waiting for a player decision.
    #[error("action not accepted while the round is in {0:?}")]
    InvalidState(RoundState),
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::NoCards,
        }
    }
}

/// Errors that can occur when reading a round's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// The round has not been settled yet.
    #[error("round is not settled (currently {0:?})")]
    NotSettled(RoundState),
}
