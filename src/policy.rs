//! The dealer's fixed drawing rule.

use crate::hand::Hand;

/// What the dealer does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerDecision {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// The dealer draws until the best total reaches a threshold.
///
/// The decision depends only on [`Hand::best_total`]; soft and hard totals
/// are treated alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerPolicy {
    stands_on: u8,
}

impl DealerPolicy {
    /// Standard threshold: hit on 16 or less, stand on 17 or more.
    pub const STANDARD_THRESHOLD: u8 = 17;

    /// Creates a policy that stands once the total reaches `stands_on`.
    #[must_use]
    pub const fn new(stands_on: u8) -> Self {
        Self { stands_on }
    }

    /// Returns the total at which the dealer stands.
    #[must_use]
    pub const fn stands_on(&self) -> u8 {
        self.stands_on
    }

    /// Decides the dealer's next move for `hand`.
    #[must_use]
    pub fn decide(&self, hand: &Hand) -> DealerDecision {
        if hand.best_total() >= self.stands_on {
            DealerDecision::Stand
        } else {
            DealerDecision::Hit
        }
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new(Self::STANDARD_THRESHOLD)
    }
}
