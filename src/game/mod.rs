//! Game engine and state management.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::sync::Mutex;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{DeckError, GameError, InvariantViolation, SetupError};
use crate::hand::{Hand, INITIAL_HAND_SIZE, MAX_HAND_SIZE};
use crate::options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
use crate::player::{Player, PlayerSpec};
use crate::pot::Pot;
use crate::result::WinEvent;

mod actions;
mod cpu;
pub mod state;
pub mod view;

pub use state::GameState;
pub use view::{HandView, PlayerView, TableView};

/// A Pair & Follow game session.
///
/// The game owns the deck, the pot, the seated players and the turn state.
/// Every command validates first and mutates second, so a rejected command
/// leaves the session untouched.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: Mutex<GameState>,
    /// Seated players in turn order.
    players: Mutex<Vec<Player>>,
    /// Undealt cards.
    deck: Mutex<Deck>,
    /// Discarded cards.
    pot: Mutex<Pot>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// No players are seated until [`Game::new_game`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use pairfollow::{Difficulty, Game, GameOptions, GameState, PlayerSpec};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// game.new_game(vec![
    ///     PlayerSpec::human("You"),
    ///     PlayerSpec::cpu("CPU 1", Difficulty::Hard),
    /// ])
    /// .unwrap();
    /// assert_eq!(game.state(), GameState::AwaitingDraw(0));
    /// assert_eq!(game.cards_remaining(), 46);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::WaitingForPlayers),
            players: Mutex::new(Vec::new()),
            deck: Mutex::new(Deck::standard()),
            pot: Mutex::new(Pot::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Seats new players, shuffles a fresh deck and deals.
    ///
    /// Any game in progress is abandoned and all win counters start at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 or more than 4 players, or
    /// the deck cannot cover the initial deal.
    pub fn new_game(&self, specs: Vec<PlayerSpec>) -> Result<(), SetupError> {
        let mut deck = Deck::standard();
        deck.shuffle(&mut *self.rng.lock());
        self.new_game_with_deck(specs, deck)
    }

    /// Like [`Game::new_game`], but deals from `deck` in its current order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 or more than 4 players, or
    /// the deck cannot cover the initial deal.
    pub fn new_game_with_deck(&self, specs: Vec<PlayerSpec>, deck: Deck) -> Result<(), SetupError> {
        if specs.len() < MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers);
        }
        if specs.len() > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers);
        }

        let players = specs
            .into_iter()
            .map(|spec| Player::new(spec, self.options.hand_order))
            .collect();
        self.start(players, deck)
    }

    /// Starts a fresh session with the same players, keeping win counters.
    ///
    /// # Errors
    ///
    /// Returns an error if no game has been set up.
    pub fn rematch(&self) -> Result<(), SetupError> {
        let mut deck = Deck::standard();
        deck.shuffle(&mut *self.rng.lock());
        self.rematch_with_deck(deck)
    }

    /// Like [`Game::rematch`], but deals from `deck` in its current order.
    ///
    /// # Errors
    ///
    /// Returns an error if no game has been set up.
    pub fn rematch_with_deck(&self, deck: Deck) -> Result<(), SetupError> {
        let mut players = self.players.lock().clone();
        if players.len() < MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers);
        }
        for player in &mut players {
            player.reset();
        }
        self.start(players, deck)
    }

    fn start(&self, mut players: Vec<Player>, mut deck: Deck) -> Result<(), SetupError> {
        deck.deal_initial(
            players.iter_mut().map(Player::hand_mut),
            INITIAL_HAND_SIZE,
        )?;

        let first = if self.options.random_first_player {
            self.rng.lock().random_range(0..players.len())
        } else {
            0
        };

        log::info!(
            "new game: {} players, {} first",
            players.len(),
            players[first].name()
        );

        let mut state = self.state.lock();
        self.players.replace(players);
        self.deck.replace(deck);
        self.pot.replace(Pot::new());
        *state = GameState::AwaitingDraw(first);
        Ok(())
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the seat expected to act, if any.
    pub fn current_player(&self) -> Option<usize> {
        self.state().current_player()
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns a snapshot of the seated players.
    pub fn players(&self) -> Vec<Player> {
        self.players.lock().clone()
    }

    /// Returns a snapshot of a player's hand.
    pub fn get_hand(&self, player: usize) -> Option<Hand> {
        self.players.lock().get(player).map(|p| p.hand().clone())
    }

    /// Returns the win counter of every seat.
    pub fn wins(&self) -> Vec<u32> {
        self.players.lock().iter().map(Player::wins).collect()
    }

    /// Returns the top card of the pot.
    pub fn pot_top(&self) -> Option<Card> {
        self.pot.lock().top()
    }

    /// Returns a snapshot of the pot.
    pub fn get_pot(&self) -> Pot {
        self.pot.lock().clone()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Checks that deck, hands and pot together hold each card exactly once.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn audit(&self) -> Result<(), InvariantViolation> {
        if *self.state.lock() == GameState::WaitingForPlayers {
            return Ok(());
        }
        let players = self.players.lock();
        let deck = self.deck.lock();
        let pot = self.pot.lock();
        audit(&players, &deck, &pot)
    }
}

/// Checks that the 52 cards are each in exactly one place.
fn audit(players: &[Player], deck: &Deck, pot: &Pot) -> Result<(), InvariantViolation> {
    for player in players {
        if player.hand().len() > MAX_HAND_SIZE {
            return Err(InvariantViolation::HandOverflow);
        }
    }

    let held = players.iter().flat_map(|p| p.hand().cards());
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for &card in deck.cards().iter().chain(held).chain(pot.cards()) {
        if !seen.insert(card) {
            return Err(InvariantViolation::DuplicateCard(card));
        }
    }

    if seen.len() == DECK_SIZE {
        Ok(())
    } else {
        Err(InvariantViolation::CardCountMismatch(seen.len()))
    }
}

/// Finds the first player, in seat order, holding a winning combination.
fn find_winner(players: &[Player], pot_top: Option<Card>) -> Option<(usize, WinEvent)> {
    players.iter().enumerate().find_map(|(index, player)| {
        let cards = player.hand().cards();
        let combination = player.hand().winning_combination(pot_top)?;
        let (cards, used_pot_top) = match (cards, pot_top) {
            ([a, b, c, d], _) => ([*a, *b, *c, *d], false),
            ([a, b, c], Some(top)) => ([*a, *b, *c, top], true),
            _ => return None,
        };
        Some((
            index,
            WinEvent {
                player_index: index,
                cards,
                combination,
                used_pot_top,
                wins: player.wins() + 1,
            },
        ))
    })
}

/// Maps a deck failure during play to the invariant it breaks.
const fn deck_fault(error: DeckError) -> InvariantViolation {
    match error {
        DeckError::DuplicateCard(card) | DeckError::NotDealt(card) => {
            InvariantViolation::DuplicateCard(card)
        }
        DeckError::WrongSize(count) => InvariantViolation::CardCountMismatch(count),
    }
}

/// Moves the game to [`GameState::Halted`] and reports the violation.
fn halt(state: &mut GameState, violation: InvariantViolation) -> GameError {
    log::error!("game halted: {violation}");
    *state = GameState::Halted;
    GameError::Invariant(violation)
}
