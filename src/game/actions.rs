use alloc::vec::Vec;

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::error::ActionError;
use crate::outcome::{Checkpoint, Standing, resolve};

use super::{PlayerAction, RoundEngine, RoundState};

impl RoundEngine {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            log::warn!("rejected player action in state {:?}", self.state);
            return Err(ActionError::InvalidState(self.state));
        }

        Ok(())
    }

    /// Applies a player decision and returns the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the round is not in
    /// [`RoundState::PlayerTurn`]; the round and `bankroll` are left
    /// untouched. Returns [`ActionError::NoCards`] if the deck runs out.
    pub fn apply_player_action(
        &mut self,
        action: PlayerAction,
        bankroll: &mut Bankroll,
    ) -> Result<RoundState, ActionError> {
        match action {
            PlayerAction::Hit => {
                self.hit(bankroll)?;
            }
            PlayerAction::Stand => {
                self.stand(bankroll)?;
            }
        }

        Ok(self.state)
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust settles the round as a dealer win without playing out the
    /// dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self, bankroll: &mut Bankroll) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.draw()?;
        self.player.add_card(card);
        log::debug!("player hits {card}, total {}", self.player.best_total());

        let outcome = resolve(
            Checkpoint::PlayerHit,
            Standing::of(&self.player),
            Standing::of(self.dealer.hand()),
        );
        if outcome.is_final() {
            self.settle(outcome, bankroll);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Play passes to the dealer, who draws to completion before the round
    /// is settled. Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state or the deck
    /// runs out while the dealer must draw. An exhausted deck leaves the
    /// round, including the face-down hole card, as it was before the stand.
    pub fn stand(&mut self, bankroll: &mut Bankroll) -> Result<Vec<Card>, ActionError> {
        self.ensure_player_turn()?;

        log::debug!("player stands on {}", self.player.best_total());
        self.dealer_play(bankroll)
    }
}
