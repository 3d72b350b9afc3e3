//! Players and seat specifications.

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseDifficultyError;
use crate::hand::Hand;
use crate::options::HandOrder;

/// CPU difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Always discards a random card.
    #[default]
    Easy,
    /// Keeps pairs and runs, see [`crate::strategy`].
    Hard,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("e") || label.eq_ignore_ascii_case("easy") {
            Ok(Self::Easy)
        } else if label.eq_ignore_ascii_case("h") || label.eq_ignore_ascii_case("hard") {
            Ok(Self::Hard)
        } else {
            Err(ParseDifficultyError)
        }
    }
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Commands come from a person through the front end.
    Human,
    /// Discards are chosen by the CPU strategy.
    Cpu(Difficulty),
}

impl PlayerKind {
    /// Returns whether the seat is CPU controlled.
    #[must_use]
    pub const fn is_cpu(self) -> bool {
        matches!(self, Self::Cpu(_))
    }

    /// Returns the CPU difficulty, if any.
    #[must_use]
    pub const fn difficulty(self) -> Option<Difficulty> {
        match self {
            Self::Human => None,
            Self::Cpu(difficulty) => Some(difficulty),
        }
    }
}

/// Describes one seat when starting a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    /// Display name.
    pub name: String,
    /// Who controls the seat.
    pub kind: PlayerKind,
}

impl PlayerSpec {
    /// A human seat.
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    /// A CPU seat.
    #[must_use]
    pub fn cpu(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Cpu(difficulty),
        }
    }
}

/// A seated player.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    hand: Hand,
    has_won: bool,
    wins: u32,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(spec: PlayerSpec, order: HandOrder) -> Self {
        Self {
            name: spec.name,
            kind: spec.kind,
            hand: Hand::new(order),
            has_won: false,
            wins: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns who controls the seat.
    #[must_use]
    pub const fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Returns whether the seat is CPU controlled.
    #[must_use]
    pub const fn is_cpu(&self) -> bool {
        self.kind.is_cpu()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns whether the player won the current game.
    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.has_won
    }

    /// Returns the number of games won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    pub(crate) const fn record_win(&mut self) {
        self.has_won = true;
        self.wins += 1;
    }

    /// Clears the hand and win flag, keeping the win counter.
    pub(crate) fn reset(&mut self) {
        self.hand.clear();
        self.has_won = false;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
