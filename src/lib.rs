//! A Pair & Follow card game engine with optional `no_std` support.
//!
//! Each player holds three cards, draws a fourth, and discards one onto the
//! pot. The first player whose four cards, or three cards plus the pot top,
//! form one pair and two adjacent ranks wins.
//!
//! The crate provides a [`Game`] type that owns the deck, the pot and the
//! players and drives the draw/discard turn cycle. Presentation is left to
//! the caller: render [`Game::view`] and feed commands back in.
//!
//! # Example
//!
//! ```
//! use pairfollow::{Difficulty, Game, GameOptions, PlayerSpec};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.new_game(vec![
//!     PlayerSpec::cpu("CPU 1", Difficulty::Hard),
//!     PlayerSpec::cpu("CPU 2", Difficulty::Easy),
//! ])
//! .unwrap();
//!
//! while game.is_cpu_turn() {
//!     if game.step().is_err() {
//!         break;
//!     }
//! }
//! assert!(game.state().is_terminal());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod pot;
pub mod result;
pub mod rules;
pub mod strategy;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, DeckError, GameError, HandError, InvariantViolation, ParseDifficultyError,
    ParseRankError, PotError, SetupError,
};
pub use game::{Game, GameState, HandView, PlayerView, TableView};
pub use hand::{DiscardSelector, Hand, INITIAL_HAND_SIZE, MAX_HAND_SIZE};
pub use options::{GameOptions, HandOrder, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{Difficulty, Player, PlayerKind, PlayerSpec};
pub use pot::Pot;
pub use result::{DiscardResult, DrawResult, StepResult, WinEvent};
pub use rules::{Combination, is_winning_hand};
