//! CLI Pair & Follow example.
//!
//! Set `PAIRFOLLOW_LOG` to `debug`, `info`, `warn` or `error` to see engine logs.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pairfollow::{
    Card, Combination, Difficulty, DiscardResult, DrawResult, Game, GameError, GameOptions,
    GameState, HandView, MAX_PLAYERS, MIN_PLAYERS, PlayerSpec, Rank, StepResult, TableView,
    WinEvent,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    init_logging();
    println!("Pair & Follow CLI example (type 'q' to quit)");
    println!("Hold a pair plus two neighbouring ranks to win, e.g. 5 5 6 7.\n");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    let Some(specs) = prompt_players() else {
        return;
    };
    if let Err(err) = game.new_game(specs) {
        println!("Setup error: {err}");
        return;
    }

    loop {
        if !play(&game) {
            println!("Goodbye.");
            return;
        }

        print_scores(&game);
        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {
                if let Err(err) = game.rematch() {
                    println!("Setup error: {err}");
                    return;
                }
            }
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

fn init_logging() {
    let level = std::env::var("PAIRFOLLOW_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Off);
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

/// Plays one game to its end. Returns `false` if the user quit.
fn play(game: &Game) -> bool {
    loop {
        match game.state() {
            GameState::AwaitingDraw(player) if game.is_cpu_turn() => {
                let name = seat_name(game, player);
                match game.play_cpu_turn() {
                    Ok(StepResult::Discard(DiscardResult::Discarded { card, .. })) => {
                        println!("{name} draws and discards {}.", format_card(&card));
                    }
                    Ok(result) => {
                        if let Some(event) = result.win() {
                            announce(game, event);
                        }
                    }
                    Err(err) => {
                        report(&err);
                        return true;
                    }
                }
            }
            GameState::AwaitingDraw(player) => {
                if !human_turn(game, player) {
                    return false;
                }
            }
            GameState::Won(_) | GameState::Exhausted | GameState::Halted => {
                print_final(&game.view(None));
                return true;
            }
            state => {
                println!("Unexpected state: {state:?}");
                return true;
            }
        }
    }
}

/// Runs a human seat's draw and discard. Returns `false` if the user quit.
fn human_turn(game: &Game, player: usize) -> bool {
    let name = seat_name(game, player);
    println!("\n--- {name}'s turn ---");
    print_table(&game.view(Some(player)));

    match game.submit_draw(player) {
        Ok(DrawResult::Drawn { card, recycled }) => {
            if recycled {
                println!("The deck ran out. The pot was shuffled back in.");
            }
            println!("You draw {}.", format_card(&card));
        }
        Ok(DrawResult::Won(event)) => {
            announce(game, &event);
            return true;
        }
        Err(err) => {
            report(&err);
            return true;
        }
    }

    if let Some(hand) = game.get_hand(player) {
        println!("{}", render_cards(hand.cards()));
    }

    loop {
        let input = prompt_line("Discard which rank? (A, 2-10, J, Q, K): ");
        if input == "q" || input == "quit" {
            return false;
        }
        let Ok(rank) = input.parse::<Rank>() else {
            println!("That is not a rank.");
            continue;
        };

        match game.submit_discard(player, rank) {
            Ok(DiscardResult::Discarded { card, .. }) => {
                println!("You discard {}.", format_card(&card));
                return true;
            }
            Ok(DiscardResult::Won(event)) => {
                announce(game, &event);
                return true;
            }
            Err(GameError::Action(err)) => println!("{err}. Try again."),
            Err(err) => {
                report(&err);
                return true;
            }
        }
    }
}

fn prompt_players() -> Option<Vec<PlayerSpec>> {
    let count = loop {
        let count = prompt_usize(&format!(
            "Number of players ({MIN_PLAYERS}-{MAX_PLAYERS}): "
        ))?;
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            break count;
        }
        println!("Please choose between {MIN_PLAYERS} and {MAX_PLAYERS}.");
    };

    let mut specs = Vec::with_capacity(count);
    for seat in 1..=count {
        let mut name = prompt_raw(&format!("Name of player {seat}: "));
        if name.is_empty() {
            name = format!("Player {seat}");
        }
        if name.eq_ignore_ascii_case("q") {
            return None;
        }

        let spec = match prompt_line("Human or CPU? (h/c): ").as_str() {
            "c" | "cpu" => PlayerSpec::cpu(name, prompt_difficulty()?),
            "q" | "quit" => return None,
            _ => PlayerSpec::human(name),
        };
        specs.push(spec);
    }
    Some(specs)
}

fn prompt_difficulty() -> Option<Difficulty> {
    loop {
        let input = prompt_line("Difficulty? (e/h): ");
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse() {
            Ok(difficulty) => return Some(difficulty),
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn seat_name(game: &Game, player: usize) -> String {
    game.players()
        .get(player)
        .map(|p| p.name().to_string())
        .unwrap_or_default()
}

fn announce(game: &Game, event: &WinEvent) {
    let name = seat_name(game, event.player_index);
    let Combination { pair, run } = event.combination;
    println!("\n*** {name} wins with a pair of {pair} and {}-{}! ***", run.0, run.1);
    if event.used_pot_top {
        println!("(completed with the pot top)");
    }
    println!("{}", render_cards(&event.cards));
}

fn report(err: &GameError) {
    match err {
        GameError::NoCardsRemain => println!("No cards remain. The game is a draw."),
        err => println!("Game error: {err}"),
    }
}

fn print_scores(game: &Game) {
    println!("Wins:");
    for player in game.players() {
        println!("  {}: {}", player.name(), player.wins());
    }
}

fn print_table(view: &TableView) {
    println!("Deck: {} cards | Pot: {} cards", view.deck_count, view.pot_count);
    match view.pot_top {
        Some(card) => println!("Pot top: {}", format_card(&card)),
        None => println!("Pot top: (empty)"),
    }

    for player in &view.players {
        if let HandView::Visible(cards) = &player.hand {
            println!("{}'s hand:", player.name);
            println!("{}", render_cards(cards));
        } else {
            println!("{}: {} cards", player.name, player.hand.len());
        }
    }
}

fn print_final(view: &TableView) {
    println!();
    for player in &view.players {
        let marker = if player.has_won { "*" } else { " " };
        let cards = match &player.hand {
            HandView::Visible(cards) => cards
                .iter()
                .map(format_card)
                .collect::<Vec<_>>()
                .join(" "),
            HandView::Hidden(count) => format!("{count} cards"),
        };
        println!("{marker} {}: {cards}", player.name);
    }
    println!();
}

/// Draws cards side by side as small ASCII boxes.
fn render_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }

    let mut rows = [const { String::new() }; 5];
    for card in cards {
        let rank = card.rank.label();
        let suit = colorize(&card.suit.symbol().to_string(), suit_color(card));
        rows[0].push_str("+-----+ ");
        rows[1].push_str(&format!("|{rank:<5}| "));
        rows[2].push_str(&format!("|  {suit}  | "));
        rows[3].push_str(&format!("|{rank:>5}| "));
        rows[4].push_str("+-----+ ");
    }
    rows.map(|row| row.trim_end().to_string()).join("\n")
}

fn format_card(card: &Card) -> String {
    colorize(&card.to_string(), suit_color(card))
}

const fn suit_color(card: &Card) -> &'static str {
    if card.suit.is_red() { "31" } else { "34" }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
