//! Error types for game operations.

use thiserror::Error;

use crate::card::{Card, Rank};

/// Error returned when a rank label cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown rank label")]
pub struct ParseRankError;

/// Error returned when a difficulty label cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown difficulty, expected (E)asy or (H)ard")]
pub struct ParseDifficultyError;

/// Errors raised by deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A full deck must hold exactly 52 cards.
    #[error("deck must have 52 cards, got {0}")]
    WrongSize(usize),
    /// A card appears twice, or was about to be dealt twice.
    #[error("duplicate card detected: {0}")]
    DuplicateCard(Card),
    /// A card handed back to the deck was never dealt from it.
    #[error("can't add undealt card: {0}")]
    NotDealt(Card),
}

/// Errors raised by hand operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand already holds four cards.
    #[error("hand already has 4 cards")]
    Full,
    /// Discard index is outside the hand.
    #[error("discard index {index} out of range for a hand of {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// No card of the requested rank is in the hand.
    #[error("no {0} in hand")]
    RankNotHeld(Rank),
}

/// Errors raised by pot operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PotError {
    /// The pot holds one card or none, so nothing is buried.
    #[error("pot has no buried cards to recycle")]
    NothingToRecycle,
    /// The deck refused the recycled cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Fewer than two players.
    #[error("at least 2 players are required")]
    TooFewPlayers,
    /// More than four players.
    #[error("at most 4 players are allowed")]
    TooManyPlayers,
    /// Initial hands must leave room for a drawn card.
    #[error("cannot deal {0} cards per hand")]
    InvalidHandSize(usize),
    /// Not enough cards in the deck for the initial deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The initial deal could not be completed.
    #[error("failed to deal: {0}")]
    Deal(#[from] DeckError),
}

/// Recoverable command errors. The game state is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// A card must be drawn before discarding.
    #[error("you must draw a card first")]
    MustDrawFirst,
    /// Only one card may be drawn per turn.
    #[error("you can only draw one card per turn")]
    AlreadyDrawn,
    /// The hand already holds four cards.
    #[error("hand already has 4 cards, discard one first")]
    HandFull,
    /// The selected card is not in the hand.
    #[error("you can't lose what you don't have")]
    NoSuchCard,
    /// The current seat is not controlled by the CPU.
    #[error("current player is not a CPU")]
    NotCpuTurn,
}

/// Fatal consistency failures. These indicate an engine bug, not user error.
///
/// When one is raised the game moves to [`GameState::Halted`] and the deck,
/// pot and hands are left as they were for inspection.
///
/// [`GameState::Halted`]: crate::GameState::Halted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The same card was found in two places.
    #[error("duplicate card detected: {0}")]
    DuplicateCard(Card),
    /// A hand grew beyond four cards.
    #[error("hand overflow: more than 4 cards")]
    HandOverflow,
    /// A discard removed a different card than the one selected.
    #[error("discarded {actual} but expected {expected}")]
    DiscardMismatch {
        /// Card that was selected.
        expected: Card,
        /// Card that actually left the hand.
        actual: Card,
    },
    /// The turn advanced back to the player who just acted.
    #[error("turn advanced back to player {0} without a full rotation")]
    TurnRotation(usize),
    /// Deck, hands and pot no longer add up to a full deck.
    #[error("card count mismatch: {0} cards tracked instead of 52")]
    CardCountMismatch(usize),
}

/// Errors returned by turn commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Recoverable command error.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Fatal engine inconsistency; the game is halted.
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),
    /// The deck is empty and the pot has nothing to recycle.
    #[error("no cards left")]
    NoCardsRemain,
}
