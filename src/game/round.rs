use crate::bankroll::Bankroll;
use crate::deck::Deck;
use crate::error::{DealError, DeckError, OutcomeError};
use crate::hand::{DealerHand, Hand};
use crate::options::{GameOptions, RoundingMode};
use crate::outcome::{Checkpoint, Outcome, RoundResult, Standing, resolve};
use crate::policy::DealerPolicy;

use super::{RoundState, RoundView};

/// Cards needed for the initial deal: two each.
const INITIAL_CARDS: usize = 4;

/// A single round of blackjack.
///
/// The engine owns the round's deck, both hands and the current
/// [`RoundState`]. Any call that can end the round takes the bankroll
/// explicitly and settles it exactly once.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    /// Undealt cards for this round.
    pub(super) deck: Deck,
    /// The player's hand.
    pub(super) player: Hand,
    /// The dealer's hand.
    pub(super) dealer: DealerHand,
    /// Current round state.
    pub(super) state: RoundState,
    /// Outcome, `InProgress` until settled.
    pub(super) outcome: Outcome,
    /// Settlement summary.
    pub(super) result: Option<RoundResult>,
    pub(super) policy: DealerPolicy,
    pub(super) bet: u32,
    pub(super) blackjack_pays: f64,
    pub(super) rounding: RoundingMode,
}

impl RoundEngine {
    /// Deals a new round from `deck`.
    ///
    /// Cards go player, dealer, player, dealer; the dealer's second card is
    /// the face-down hole card. If either side holds a natural the round is
    /// settled against `bankroll` immediately, otherwise it waits in
    /// [`RoundState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck holds fewer than
    /// four cards.
    pub fn start(
        deck: Deck,
        options: &GameOptions,
        bankroll: &mut Bankroll,
    ) -> Result<Self, DealError> {
        if deck.remaining() < INITIAL_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        let mut round = Self {
            deck,
            player: Hand::new(),
            dealer: DealerHand::new(),
            state: RoundState::Dealing,
            outcome: Outcome::InProgress,
            result: None,
            policy: DealerPolicy::new(options.dealer_stands_on),
            bet: options.bet,
            blackjack_pays: options.blackjack_pays,
            rounding: options.rounding_blackjack,
        };

        round.deal_initial()?;

        let outcome = resolve(
            Checkpoint::Deal,
            Standing::of(&round.player),
            Standing::of(round.dealer.hand()),
        );
        if outcome.is_final() {
            round.settle(outcome, bankroll);
        } else {
            round.state = RoundState::PlayerTurn;
        }

        Ok(round)
    }

    fn deal_initial(&mut self) -> Result<(), DeckError> {
        for _ in 0..2 {
            let card = self.deck.draw()?;
            self.player.add_card(card);
            let card = self.deck.draw()?;
            self.dealer.add_card(card);
        }

        log::debug!(
            "dealt player {:?} ({}), dealer up card {:?}",
            self.player.cards(),
            self.player.best_total(),
            self.dealer.up_card()
        );
        Ok(())
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome of the round.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::NotSettled`] until the round is settled.
    pub fn outcome(&self) -> Result<Outcome, OutcomeError> {
        if self.state == RoundState::Settled {
            Ok(self.outcome)
        } else {
            Err(OutcomeError::NotSettled(self.state))
        }
    }

    /// Returns the settlement summary, or `None` while the round is live.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns a read-only snapshot for rendering.
    ///
    /// The dealer's hole card is left out while it is face down.
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView {
            player_cards: self.player.cards().to_vec(),
            dealer_cards: self.dealer.visible_cards().to_vec(),
            dealer_hole_concealed: self.dealer.is_hole_concealed(),
            player_total: self.player.best_total(),
            dealer_visible_total: self.dealer.visible_total(),
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hole card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the wager for this round.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
