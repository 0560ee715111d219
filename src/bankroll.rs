//! The player's running balance across rounds.

/// A signed balance carried from round to round.
///
/// Only round settlement changes the balance; callers can read it at any
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    balance: i64,
}

impl Bankroll {
    /// Creates a bankroll holding `balance`.
    #[must_use]
    pub const fn new(balance: i64) -> Self {
        Self { balance }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    /// Returns whether the balance covers `bet`.
    #[must_use]
    pub fn covers(&self, bet: u32) -> bool {
        self.balance >= i64::from(bet)
    }

    /// Applies a signed settlement delta and returns the new balance.
    pub(crate) const fn apply(&mut self, delta: i64) -> i64 {
        self.balance = self.balance.saturating_add(delta);
        self.balance
    }
}
