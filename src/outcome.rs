//! Round outcomes, their resolution, and payouts.

use crate::hand::Hand;
use crate::options::RoundingMode;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => amount.ceil() as i64,
        RoundingMode::Down => amount.floor() as i64,
        RoundingMode::Nearest => amount.round() as i64,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as i64,
        RoundingMode::Down => libm::floor(amount) as i64,
        RoundingMode::Nearest => libm::round(amount) as i64,
    }
}

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The round is still being played.
    InProgress,
    /// Player was dealt a natural and the dealer was not.
    PlayerBlackjack,
    /// Player beat the dealer or the dealer busted.
    PlayerWins,
    /// Dealer beat the player, the player busted, or the dealer has a natural.
    DealerWins,
    /// Equal totals, or both sides have a natural.
    Draw,
}

impl Outcome {
    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Net change to the bankroll for a round played with `bet`.
    ///
    /// A blackjack pays `bet * blackjack_pays`, rounded with `rounding`.
    #[must_use]
    pub fn bankroll_delta(self, bet: u32, blackjack_pays: f64, rounding: RoundingMode) -> i64 {
        let stake = i64::from(bet);
        match self {
            Self::PlayerBlackjack => round_amount(f64::from(bet) * blackjack_pays, rounding),
            Self::PlayerWins => stake,
            Self::DealerWins => -stake,
            Self::Draw | Self::InProgress => 0,
        }
    }
}

/// Point in the round at which the outcome is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    /// Right after the initial four cards.
    Deal,
    /// After a player hit.
    PlayerHit,
    /// After the dealer has finished drawing.
    DealerDone,
}

/// What outcome resolution needs to know about one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    /// Best total.
    pub total: u8,
    /// Whether the hand is bust.
    pub bust: bool,
    /// Whether the hand is a natural.
    pub blackjack: bool,
}

impl Standing {
    /// Captures the standing of `hand`.
    #[must_use]
    pub fn of(hand: &Hand) -> Self {
        Self {
            total: hand.best_total(),
            bust: hand.is_bust(),
            blackjack: hand.is_blackjack(),
        }
    }
}

/// Determines the outcome at `checkpoint`.
///
/// Returns [`Outcome::InProgress`] when nothing decides the round yet.
#[must_use]
pub const fn resolve(checkpoint: Checkpoint, player: Standing, dealer: Standing) -> Outcome {
    match checkpoint {
        Checkpoint::Deal => match (player.blackjack, dealer.blackjack) {
            (true, true) => Outcome::Draw,
            (false, true) => Outcome::DealerWins,
            (true, false) => Outcome::PlayerBlackjack,
            (false, false) => Outcome::InProgress,
        },
        Checkpoint::PlayerHit => {
            if player.bust {
                Outcome::DealerWins
            } else {
                Outcome::InProgress
            }
        }
        Checkpoint::DealerDone => {
            if player.bust {
                Outcome::DealerWins
            } else if dealer.bust || player.total > dealer.total {
                Outcome::PlayerWins
            } else if player.total < dealer.total {
                Outcome::DealerWins
            } else {
                Outcome::Draw
            }
        }
    }
}

/// Summary of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Final outcome.
    pub outcome: Outcome,
    /// The wager for the round.
    pub bet: u32,
    /// Net change applied to the bankroll (positive = profit).
    pub net: i64,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}
