//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Dealing initial cards.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the bankroll has been settled.
    Settled,
}

/// A decision submitted by the player during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Draw one more card.
    Hit,
    /// Keep the current hand and pass play to the dealer.
    Stand,
}
