//! A single-player blackjack round engine with optional `no_std` support.
//!
//! A [`Game`] holds the bankroll and shuffles a fresh deck for every round.
//! Each round is a [`RoundEngine`] that moves from dealing through the
//! player's and dealer's turns to settlement.
//!
//! # Example
//!
//! ```
//! use bj21::{Game, GameOptions, PlayerAction, RoundState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut round = game.start_round().unwrap();
//! if round.state() == RoundState::PlayerTurn {
//!     game.apply_player_action(&mut round, PlayerAction::Stand).unwrap();
//! }
//! assert_eq!(round.state(), RoundState::Settled);
//! let _ = round.outcome().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod policy;

// Re-export main types
pub use bankroll::Bankroll;
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckBuildError, DeckError, OutcomeError};
pub use game::{Game, PlayerAction, RoundEngine, RoundState, RoundView};
pub use hand::{DealerHand, Hand};
pub use options::{GameOptions, RoundingMode};
pub use outcome::{Checkpoint, Outcome, RoundResult, Standing, resolve};
pub use policy::{DealerDecision, DealerPolicy};
