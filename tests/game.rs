//! Game integration tests.

#![expect(clippy::unwrap_used, reason = "tests unwrap freely")]

use bj21::{
    ActionError, Bankroll, Card, DECK_SIZE, DealError, Deck, Game, GameOptions, Outcome,
    OutcomeError, PlayerAction, RoundEngine, RoundState, RoundingMode, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn game() -> Game {
    Game::new(GameOptions::default(), 1)
}

fn start(game: &mut Game, draws: &[Card]) -> RoundEngine {
    game.start_round_with_deck(Deck::from_draw_order(draws).unwrap()).unwrap()
}

/// Player 10+9 against dealer 6+10, followed by `dealer_draws`.
fn nineteen_vs_sixteen(dealer_draws: &[Card]) -> Vec<Card> {
    let mut draws = vec![
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 6),    // dealer up
        card(Suit::Diamonds, 9), // player
        card(Suit::Spades, 10),  // dealer hole
    ];
    draws.extend_from_slice(dealer_draws);
    draws
}

#[test]
fn player_stands_on_19_and_dealer_makes_17() {
    let mut game = game();
    let mut round = start(&mut game, &nineteen_vs_sixteen(&[card(Suit::Hearts, 1)]));
    assert_eq!(round.state(), RoundState::PlayerTurn);

    let state = game.apply_player_action(&mut round, PlayerAction::Stand).unwrap();
    assert_eq!(state, RoundState::Settled);
    assert_eq!(round.dealer_hand().len(), 3);
    assert_eq!(round.dealer_hand().best_total(), 17);
    assert_eq!(round.outcome(), Ok(Outcome::PlayerWins));
    assert_eq!(game.bankroll(), 110);
}

#[test]
fn player_stands_on_19_and_dealer_makes_18() {
    let mut game = game();
    let mut round = start(&mut game, &nineteen_vs_sixteen(&[card(Suit::Hearts, 2)]));

    game.apply_player_action(&mut round, PlayerAction::Stand).unwrap();
    assert_eq!(round.outcome(), Ok(Outcome::PlayerWins));
    assert_eq!(game.bankroll(), 110);
}

#[test]
fn player_stands_on_19_and_dealer_busts() {
    let mut game = game();
    let mut round = start(&mut game, &nineteen_vs_sixteen(&[card(Suit::Hearts, 13)]));

    game.apply_player_action(&mut round, PlayerAction::Stand).unwrap();
    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_total, 26);
    assert_eq!(result.net, 10);
    assert_eq!(game.bankroll(), 110);
}

#[test]
fn equal_totals_are_a_draw() {
    let mut game = game();
    let mut round = start(&mut game, &nineteen_vs_sixteen(&[card(Suit::Hearts, 3)]));

    game.apply_player_action(&mut round, PlayerAction::Stand).unwrap();
    assert_eq!(round.outcome(), Ok(Outcome::Draw));
    assert_eq!(game.bankroll(), 100);
}

#[test]
fn dealer_higher_total_wins() {
    let mut game = game();
    let mut round = start(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 9),   // dealer hole
        ],
    );

    let drawn = round.stand(&mut Bankroll::new(0)).unwrap();
    assert!(drawn.is_empty());
    assert_eq!(round.outcome(), Ok(Outcome::DealerWins));
}

#[test]
fn dealer_draws_several_cards_until_17() {
    let mut game = game();
    let mut round = start(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 2),    // dealer up
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 3),   // dealer hole
            card(Suit::Hearts, 2),   // dealer 7
            card(Suit::Clubs, 4),    // dealer 11
            card(Suit::Diamonds, 1), // dealer soft 22 -> 12
            card(Suit::Spades, 5),   // dealer 17
            card(Suit::Hearts, 9),   // never drawn
        ],
    );

    game.apply_player_action(&mut round, PlayerAction::Stand).unwrap();
    assert_eq!(round.dealer_hand().len(), 6);
    assert_eq!(round.dealer_hand().best_total(), 17);
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.outcome(), Ok(Outcome::PlayerWins));
}

#[test]
fn dealer_stands_on_soft_17() {
    let mut game = game();
    let mut round = start(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 1),    // dealer up
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 6),   // dealer hole
            card(Suit::Hearts, 4),   // never drawn
        ],
    );

    game.apply_player_action(&mut round, PlayerAction::Stand).unwrap();
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.outcome(), Ok(Outcome::PlayerWins));
}

#[test]
fn dealer_natural_beats_player() {
    let mut game = game();
    let round = start(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Spades, 1),   // dealer up
            card(Suit::Diamonds, 9), // player
            card(Suit::Clubs, 13),   // dealer hole
        ],
    );

    assert_eq!(round.state(), RoundState::Settled);
    assert_eq!(round.outcome(), Ok(Outcome::DealerWins));
    assert!(round.result().unwrap().dealer_blackjack);
    assert_eq!(game.bankroll(), 90);
}

#[test]
fn both_naturals_draw() {
    let mut game = game();
    let round = start(
        &mut game,
        &[
            card(Suit::Hearts, 1),    // player
            card(Suit::Spades, 1),    // dealer up
            card(Suit::Diamonds, 12), // player
            card(Suit::Clubs, 10),    // dealer hole
        ],
    );

    assert_eq!(round.outcome(), Ok(Outcome::Draw));
    assert_eq!(game.bankroll(), 100);
}

#[test]
fn player_natural_pays_three_to_two() {
    let mut game = game();
    let round = start(
        &mut game,
        &[
            card(Suit::Hearts, 1),    // player
            card(Suit::Spades, 9),    // dealer up
            card(Suit::Diamonds, 11), // player
            card(Suit::Clubs, 10),    // dealer hole
        ],
    );

    assert_eq!(round.outcome(), Ok(Outcome::PlayerBlackjack));
    assert_eq!(round.result().unwrap().net, 15);
    assert_eq!(game.bankroll(), 115);
}

#[test]
fn player_bust_settles_without_dealer_draws() {
    let mut game = game();
    let mut round = start(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 6), // player
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 8),   // player hit
            card(Suit::Clubs, 5),    // never drawn
        ],
    );

    let state = game.apply_player_action(&mut round, PlayerAction::Hit).unwrap();
    assert_eq!(state, RoundState::Settled);
    assert_eq!(round.outcome(), Ok(Outcome::DealerWins));
    assert!(round.player_hand().is_bust());
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(game.bankroll(), 90);
}

#[test]
fn hit_below_21_keeps_player_turn() {
    let mut game = game();
    let mut round = start(
        &mut game,
        &[
            card(Suit::Hearts, 5),   // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 4), // player
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 1),   // player hit: soft 20
            card(Suit::Clubs, 9),    // player hit: 19
        ],
    );

    let hit = round.hit(&mut Bankroll::new(0)).unwrap();
    assert_eq!(hit, card(Suit::Hearts, 1));
    assert_eq!(round.player_hand().best_total(), 20);
    assert_eq!(round.state(), RoundState::PlayerTurn);

    game.apply_player_action(&mut round, PlayerAction::Hit).unwrap();
    assert_eq!(round.player_hand().best_total(), 19);
    assert_eq!(round.state(), RoundState::PlayerTurn);
}

#[test]
fn action_after_settlement_is_rejected() {
    let mut game = game();
    let mut round = start(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 6), // player
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 8),   // player hit
            card(Suit::Clubs, 5),
        ],
    );
    game.apply_player_action(&mut round, PlayerAction::Hit).unwrap();
    let balance = game.bankroll();
    let before = round.view();

    for action in [PlayerAction::Hit, PlayerAction::Stand] {
        assert_eq!(
            game.apply_player_action(&mut round, action).unwrap_err(),
            ActionError::InvalidState(RoundState::Settled)
        );
    }
    assert_eq!(game.bankroll(), balance);
    assert_eq!(round.view(), before);
    assert_eq!(round.cards_remaining(), 1);
}

#[test]
fn view_conceals_hole_card_until_dealer_turn() {
    let mut game = game();
    let mut round = start(&mut game, &nineteen_vs_sixteen(&[card(Suit::Hearts, 2)]));

    let view = round.view();
    assert_eq!(
        view.player_cards,
        vec![card(Suit::Hearts, 10), card(Suit::Diamonds, 9)]
    );
    assert_eq!(view.dealer_cards, vec![card(Suit::Clubs, 6)]);
    assert!(view.dealer_hole_concealed);
    assert_eq!(view.player_total, 19);
    assert_eq!(view.dealer_visible_total, 6);

    game.apply_player_action(&mut round, PlayerAction::Stand).unwrap();
    let view = round.view();
    assert_eq!(view.dealer_cards.len(), 3);
    assert!(!view.dealer_hole_concealed);
    assert_eq!(view.dealer_visible_total, 18);
}

#[test]
fn outcome_unavailable_before_settlement() {
    let mut game = game();
    let round = start(&mut game, &nineteen_vs_sixteen(&[]));
    assert_eq!(
        round.outcome().unwrap_err(),
        OutcomeError::NotSettled(RoundState::PlayerTurn)
    );
    assert!(round.result().is_none());
}

#[test]
fn deal_requires_four_cards() {
    let mut game = game();
    let err = game
        .start_round_with_deck(
            Deck::from_draw_order(&[
                card(Suit::Hearts, 9),
                card(Suit::Clubs, 5),
                card(Suit::Diamonds, 7),
            ])
            .unwrap(),
        )
        .unwrap_err();
    assert_eq!(err, DealError::NotEnoughCards);
    assert_eq!(game.rounds_played(), 0);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut game = game();
    let mut round = start(
        &mut game,
        &[
            card(Suit::Hearts, 5),   // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Spades, 6),   // player
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    assert_eq!(
        game.apply_player_action(&mut round, PlayerAction::Hit).unwrap_err(),
        ActionError::NoCards
    );
    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(game.bankroll(), 100);
}

#[test]
fn stand_with_exhausted_deck_keeps_player_turn() {
    let mut game = game();
    let mut round = start(&mut game, &nineteen_vs_sixteen(&[]));
    let before = round.view();

    assert_eq!(
        game.apply_player_action(&mut round, PlayerAction::Stand).unwrap_err(),
        ActionError::NoCards
    );
    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.view(), before);
    assert!(!round.dealer_hand().is_hole_revealed());
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(
        round.outcome().unwrap_err(),
        OutcomeError::NotSettled(RoundState::PlayerTurn)
    );
    assert_eq!(game.bankroll(), 100);

    assert_eq!(
        game.apply_player_action(&mut round, PlayerAction::Stand).unwrap_err(),
        ActionError::NoCards
    );
}

#[test]
fn stand_with_partly_exhausted_deck_discards_dealer_draws() {
    let mut game = game();
    let mut round = start(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 2),    // dealer up
            card(Suit::Diamonds, 9), // player
            card(Suit::Spades, 3),   // dealer hole: 5
            card(Suit::Hearts, 4),   // dealer 9, then the deck is empty
        ],
    );

    assert_eq!(
        game.apply_player_action(&mut round, PlayerAction::Stand).unwrap_err(),
        ActionError::NoCards
    );
    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.cards_remaining(), 1);
    assert!(round.view().dealer_hole_concealed);
    assert_eq!(game.bankroll(), 100);
}

#[test]
fn configured_bet_and_rounding_apply_to_blackjack() {
    let options = GameOptions::default()
        .with_bet(5)
        .with_rounding_blackjack(RoundingMode::Up);
    let mut game = Game::new(options, 3);
    let round = start(
        &mut game,
        &[
            card(Suit::Hearts, 13),  // player
            card(Suit::Spades, 4),   // dealer up
            card(Suit::Diamonds, 1), // player
            card(Suit::Clubs, 10),   // dealer hole
        ],
    );

    assert_eq!(round.bet(), 5);
    assert_eq!(round.outcome(), Ok(Outcome::PlayerBlackjack));
    assert_eq!(game.bankroll(), 108);
}

#[test]
fn shuffled_rounds_settle_and_track_bankroll() {
    let mut game = Game::new(GameOptions::default(), 42);
    let mut expected = game.bankroll();

    for _ in 0..200 {
        let mut round = game.start_round().unwrap();
        assert_eq!(round.cards_remaining(), DECK_SIZE - 4);

        while round.state() == RoundState::PlayerTurn {
            let action = if round.player_hand().best_total() < 17 {
                PlayerAction::Hit
            } else {
                PlayerAction::Stand
            };
            game.apply_player_action(&mut round, action).unwrap();
        }

        assert_eq!(round.state(), RoundState::Settled);
        let result = round.result().unwrap();
        assert_eq!(Ok(result.outcome), round.outcome());
        assert!(result.net.abs() <= 15);
        if !result.player_bust && result.outcome != Outcome::PlayerBlackjack {
            assert!(result.dealer_total >= 17);
        }
        expected += result.net;
        assert_eq!(game.bankroll(), expected);
    }
    assert_eq!(game.rounds_played(), 200);
}

#[test]
fn same_seed_deals_same_rounds() {
    let mut first = Game::new(GameOptions::default(), 9);
    let mut second = Game::new(GameOptions::default(), 9);

    for _ in 0..5 {
        let a = first.start_round().unwrap();
        let b = second.start_round().unwrap();
        assert_eq!(a.view(), b.view());
    }
}
