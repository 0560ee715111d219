//! Game configuration options.

use crate::policy::DealerPolicy;

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bj21::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_bankroll(250)
///     .with_blackjack_pays(1.2);
/// assert_eq!(options.bet, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Fixed wager placed on every round.
    pub bet: u32,
    /// Balance the bankroll starts with.
    pub starting_bankroll: i64,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Total at which the dealer stops drawing.
    pub dealer_stands_on: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            bet: 10,
            starting_bankroll: 100,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: DealerPolicy::STANDARD_THRESHOLD,
        }
    }
}

impl GameOptions {
    /// Sets the fixed bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bj21::GameOptions;
    ///
    /// let options = GameOptions::default().with_bet(25);
    /// assert_eq!(options.bet, 25);
    /// ```
    #[must_use]
    pub const fn with_bet(mut self, bet: u32) -> Self {
        self.bet = bet;
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bj21::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(500);
    /// assert_eq!(options.starting_bankroll, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, amount: i64) -> Self {
        self.starting_bankroll = amount;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bj21::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bj21::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bj21::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }
}
