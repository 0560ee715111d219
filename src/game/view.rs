//! Read-only round snapshot for renderers.

use alloc::vec::Vec;

use crate::card::Card;

/// What a table renderer may show about a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// The player's cards, in deal order.
    pub player_cards: Vec<Card>,
    /// The dealer's face-up cards, in deal order.
    pub dealer_cards: Vec<Card>,
    /// Whether one more dealer card is dealt but face down.
    pub dealer_hole_concealed: bool,
    /// The player's best total.
    pub player_total: u8,
    /// The dealer total a spectator can compute from the face-up cards.
    pub dealer_visible_total: u8,
}
