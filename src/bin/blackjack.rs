//! Console blackjack against the house dealer.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bj21::{Card, Game, GameOptions, Outcome, PlayerAction, RoundEngine, RoundState, RoundView};
use clap::Parser;

#[derive(Parser)]
#[command(name = "blackjack", about = "Play blackjack against the dealer")]
struct Cli {
    /// Seed for shuffling; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// Starting balance
    #[arg(long, default_value_t = 100)]
    bankroll: i64,
}

/// Commands accepted at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Deal,
    Money,
    Hit,
    Stand,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input.trim().chars().next()?.to_ascii_uppercase() {
        'D' => Some(Command::Deal),
        'M' => Some(Command::Money),
        'H' => Some(Command::Hit),
        'S' => Some(Command::Stand),
        'Q' => Some(Command::Quit),
        _ => None,
    }
}

struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    /// Prompts until one of `allowed` is entered. `None` means end of input.
    fn command(&mut self, allowed: &[Command], help: &str) -> Option<Command> {
        loop {
            print!("What would you like to do? ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }

            match parse_command(&line) {
                Some(command) if allowed.contains(&command) => return Some(command),
                _ => println!("Invalid command. Valid options are: {help}"),
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::debug!("shuffle seed {seed}");

    let options = GameOptions::default().with_starting_bankroll(cli.bankroll);
    let mut game = Game::new(options, seed);
    let mut console = Console {
        input: io::stdin().lock(),
    };

    println!("Welcome to Blackjack");
    println!(
        "You have ${}. Each bet is ${}",
        game.bankroll(),
        game.options().bet
    );

    loop {
        let Some(command) = console.command(
            &[Command::Deal, Command::Money, Command::Quit],
            "[D]eal, [M]oney, [Q]uit",
        ) else {
            break;
        };

        match command {
            Command::Deal => {
                if !game.can_cover_bet() {
                    println!("You are out of money. Game over.");
                    break;
                }
                if !play_round(&mut game, &mut console) {
                    break;
                }
            }
            Command::Money => println!("You have ${}", game.bankroll()),
            _ => break,
        }
    }

    println!("Goodbye");
}

/// Plays one round. Returns `false` if the player quit.
fn play_round<R: BufRead>(game: &mut Game, console: &mut Console<R>) -> bool {
    let mut round = match game.start_round() {
        Ok(round) => round,
        Err(err) => {
            log::error!("deal failed: {err}");
            return false;
        }
    };

    print_table(&round.view());

    while round.state() == RoundState::PlayerTurn {
        let action = match console.command(
            &[Command::Hit, Command::Stand, Command::Quit],
            "[H]it, [S]tand, [Q]uit",
        ) {
            Some(Command::Hit) => PlayerAction::Hit,
            Some(Command::Stand) => PlayerAction::Stand,
            _ => return false,
        };

        if let Err(err) = game.apply_player_action(&mut round, action) {
            log::error!("action failed: {err}");
            return false;
        }
        print_table(&round.view());
    }

    print_summary(&round, game.bankroll());
    true
}

fn print_table(view: &RoundView) {
    println!();
    println!("{:>13}{:>17}", "Player", "Dealer");
    println!("{:>13}{:>17}", "======", "======");

    let dealer_rows = view.dealer_cards.len() + usize::from(view.dealer_hole_concealed);
    let rows = view.player_cards.len().max(dealer_rows);
    for row in 0..rows {
        let player = view.player_cards.get(row).map(Card::to_string);
        let dealer = match view.dealer_cards.get(row) {
            Some(card) => card.to_string(),
            None if view.dealer_hole_concealed && row == view.dealer_cards.len() => {
                "xx".to_string()
            }
            None => String::new(),
        };
        println!("{:>13}{:>17}", player.unwrap_or_default(), dealer);
    }

    println!();
    println!(
        "Total{:>8}{:>17}",
        view.player_total, view.dealer_visible_total
    );
    println!();
}

fn print_summary(round: &RoundEngine, bankroll: i64) {
    let Some(result) = round.result() else {
        return;
    };

    let headline = match result.outcome {
        Outcome::PlayerBlackjack => "Blackjack! You win",
        Outcome::PlayerWins if result.dealer_bust => "Dealer busts. You win",
        Outcome::PlayerWins => "You win",
        Outcome::DealerWins if result.player_bust => "You bust. Dealer wins",
        Outcome::DealerWins if result.dealer_blackjack => "Dealer blackjack. Dealer wins",
        Outcome::DealerWins => "Dealer wins",
        Outcome::Draw | Outcome::InProgress => "Draw",
    };

    match result.net {
        net if net > 0 => println!("{headline}. You win ${net}. You have ${bankroll}"),
        net if net < 0 => println!("{headline}. You lose ${}. You have ${bankroll}", -net),
        _ => println!(
            "{headline}. Your ${} bet is returned. You have ${bankroll}",
            round.bet()
        ),
    }
}
