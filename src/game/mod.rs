//! Game session and round state machine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bankroll::Bankroll;
use crate::deck::Deck;
use crate::error::{ActionError, DealError};
use crate::options::GameOptions;

mod actions;
mod dealer;
mod round;
pub mod state;
mod view;

pub use round::RoundEngine;
pub use state::{PlayerAction, RoundState};
pub use view::RoundView;

/// A blackjack session: one player, an automated dealer, and a bankroll
/// that carries over between rounds.
///
/// Each round gets a fresh deck shuffled from the session's seeded RNG.
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// The player's running balance.
    bankroll: Bankroll,
    /// Random number generator used to shuffle each round's deck.
    rng: ChaCha8Rng,
    /// Rounds dealt so far.
    rounds_played: u32,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bj21::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.bankroll(), 100);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let bankroll = Bankroll::new(options.starting_bankroll);

        Self {
            options,
            bankroll,
            rng: ChaCha8Rng::seed_from_u64(seed),
            rounds_played: 0,
        }
    }

    /// Starts a round with a freshly shuffled 52-card deck.
    ///
    /// If the initial deal produces a natural the returned round is already
    /// settled and the bankroll updated.
    ///
    /// # Errors
    ///
    /// Propagates [`RoundEngine::start`] errors.
    pub fn start_round(&mut self) -> Result<RoundEngine, DealError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.start_round_with_deck(deck)
    }

    /// Starts a round dealt from `deck`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck cannot cover the
    /// initial deal.
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<RoundEngine, DealError> {
        let round = RoundEngine::start(deck, &self.options, &mut self.bankroll)?;
        self.rounds_played += 1;
        log::debug!("round {} dealt", self.rounds_played);
        Ok(round)
    }

    /// Applies a player action to `round`, settling against this game's
    /// bankroll if the round ends.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if `round` is not waiting for a
    /// player decision, or [`ActionError::NoCards`] if its deck runs out.
    pub fn apply_player_action(
        &mut self,
        round: &mut RoundEngine,
        action: PlayerAction,
    ) -> Result<RoundState, ActionError> {
        round.apply_player_action(action, &mut self.bankroll)
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn bankroll(&self) -> i64 {
        self.bankroll.balance()
    }

    /// Returns whether the balance still covers the fixed bet.
    #[must_use]
    pub fn can_cover_bet(&self) -> bool {
        self.bankroll.covers(self.options.bet)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of rounds dealt so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
}
