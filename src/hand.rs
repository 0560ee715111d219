//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Evaluates `cards`, returning the best total and whether it is soft.
///
/// Every Ace starts at 11. While the total is over 21, one Ace still
/// counted as 11 is dropped to 1 and the total is recomputed.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut values: Vec<u8> = cards.iter().map(Card::base_value).collect();
    let mut total: u8 = values.iter().fold(0, |sum, &v| sum.saturating_add(v));

    while total > 21 {
        let Some(ace) = cards
            .iter()
            .zip(values.iter_mut())
            .find_map(|(card, value)| (card.is_ace() && *value == 11).then_some(value))
        else {
            break;
        };
        *ace = 1;
        total = values.iter().fold(0, |sum, &v| sum.saturating_add(v));
    }

    let is_soft = total <= 21
        && cards
            .iter()
            .zip(&values)
            .any(|(card, &value)| card.is_ace() && value == 11);
    (total, is_soft)
}

/// An ordered, append-only hand of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Best total of the hand.
    ///
    /// The highest total not above 21 reachable by counting each Ace as 11
    /// or 1. If every valuation busts, returns the total with all Aces as 1.
    #[must_use]
    pub fn best_total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.best_total() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.best_total() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand, whose second card stays face down until revealed.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    hand: Hand,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the underlying hand with every card, hole card included.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the cards a spectator can see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            self.hand.cards()
        } else {
            &self.hand.cards()[..self.hand.len().min(1)]
        }
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Returns whether a dealt hole card is still face down.
    #[must_use]
    pub fn is_hole_concealed(&self) -> bool {
        !self.hole_revealed && self.hand.len() > 1
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible total (only the up card if the hole is hidden).
    #[must_use]
    pub fn visible_total(&self) -> u8 {
        if self.hole_revealed {
            self.best_total()
        } else {
            self.up_card().map_or(0, Card::base_value)
        }
    }

    /// Calculates the full best total of the hand.
    #[must_use]
    pub fn best_total(&self) -> u8 {
        self.hand.best_total()
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}
