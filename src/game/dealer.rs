use alloc::vec::Vec;

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::error::ActionError;
use crate::outcome::{Checkpoint, Outcome, RoundResult, Standing, resolve};
use crate::policy::DealerDecision;

use super::{RoundEngine, RoundState};

impl RoundEngine {
    /// Dealer plays their hand according to the policy.
    ///
    /// The dealer reveals their hole card and draws until the policy says
    /// stand or the hand busts, then the round is settled. Draws are made
    /// against a copy of the deck and hand; if the deck runs out nothing is
    /// committed and the round stays in [`RoundState::PlayerTurn`].
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(
        &mut self,
        bankroll: &mut Bankroll,
    ) -> Result<Vec<Card>, ActionError> {
        debug_assert_eq!(self.state, RoundState::PlayerTurn);

        let mut deck = self.deck.clone();
        let mut hand = self.dealer.hand().clone();
        let mut drawn_cards = Vec::new();

        while !hand.is_bust() {
            let decision = self.policy.decide(&hand);
            log::debug!("dealer {decision:?} on {}", hand.best_total());
            if decision == DealerDecision::Stand {
                break;
            }

            let card = deck
                .draw()
                .inspect_err(|_| log::warn!("deck ran out during the dealer turn"))?;
            hand.add_card(card);
            drawn_cards.push(card);
        }

        self.state = RoundState::DealerTurn;
        self.deck = deck;
        self.dealer.reveal_hole();
        for &card in &drawn_cards {
            self.dealer.add_card(card);
        }
        log::debug!(
            "dealer reveals {:?} ({})",
            self.dealer.cards(),
            self.dealer.best_total()
        );

        let outcome = resolve(
            Checkpoint::DealerDone,
            Standing::of(&self.player),
            Standing::of(self.dealer.hand()),
        );
        self.settle(outcome, bankroll);

        Ok(drawn_cards)
    }

    /// Fixes the outcome and applies its payout to `bankroll`.
    pub(super) fn settle(&mut self, outcome: Outcome, bankroll: &mut Bankroll) {
        debug_assert_ne!(self.state, RoundState::Settled);
        debug_assert!(outcome.is_final());

        let net = outcome.bankroll_delta(self.bet, self.blackjack_pays, self.rounding);
        let balance = bankroll.apply(net);

        self.dealer.reveal_hole();
        self.outcome = outcome;
        self.state = RoundState::Settled;
        self.result = Some(RoundResult {
            outcome,
            bet: self.bet,
            net,
            player_total: self.player.best_total(),
            dealer_total: self.dealer.best_total(),
            player_bust: self.player.is_bust(),
            dealer_bust: self.dealer.is_bust(),
            dealer_blackjack: self.dealer.is_blackjack(),
        });

        log::info!("round settled: {outcome:?}, net {net}, balance {balance}");
    }
}
