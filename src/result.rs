//! Outcome types returned by turn commands.

use crate::card::Card;
use crate::rules::Combination;

/// A completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinEvent {
    /// Seat of the winner.
    pub player_index: usize,
    /// The four winning cards. When `used_pot_top` is set, the last one is
    /// the pot top.
    pub cards: [Card; 4],
    /// The combination the cards form.
    pub combination: Combination,
    /// Whether the win came from a three-card hand plus the pot top.
    pub used_pot_top: bool,
    /// Total wins of the winner, including this one.
    pub wins: u32,
}

/// Result of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawResult {
    /// The card was drawn and the player must now discard.
    Drawn {
        /// The card drawn.
        card: Card,
        /// Whether the buried pot was recycled into the deck first.
        recycled: bool,
    },
    /// The draw ended the game.
    Won(WinEvent),
}

/// Result of a discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardResult {
    /// The card went to the pot and the turn passed on.
    Discarded {
        /// The card discarded.
        card: Card,
        /// Seat of the next player to draw.
        next_player: usize,
    },
    /// The discard ended the game, possibly for another player.
    Won(WinEvent),
}

impl DrawResult {
    /// Returns the win, if the draw ended the game.
    #[must_use]
    pub const fn win(&self) -> Option<&WinEvent> {
        match self {
            Self::Won(event) => Some(event),
            Self::Drawn { .. } => None,
        }
    }
}

impl DiscardResult {
    /// Returns the win, if the discard ended the game.
    #[must_use]
    pub const fn win(&self) -> Option<&WinEvent> {
        match self {
            Self::Won(event) => Some(event),
            Self::Discarded { .. } => None,
        }
    }
}

/// Result of a single CPU step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The CPU drew a card.
    Draw(DrawResult),
    /// The CPU discarded a card.
    Discard(DiscardResult),
}

impl StepResult {
    /// Returns the win, if the step ended the game.
    #[must_use]
    pub const fn win(&self) -> Option<&WinEvent> {
        match self {
            Self::Draw(result) => result.win(),
            Self::Discard(result) => result.win(),
        }
    }
}
