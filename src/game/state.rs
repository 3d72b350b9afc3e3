//! Game state types.

/// Turn controller state. Player values are seat indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game has been started.
    WaitingForPlayers,
    /// The player must draw a card.
    AwaitingDraw(usize),
    /// The player holds four cards and must discard one.
    AwaitingDiscard(usize),
    /// The player has won. Terminal.
    Won(usize),
    /// The deck is empty and the pot has nothing to recycle. Terminal.
    Exhausted,
    /// An invariant violation stopped the game. Terminal.
    Halted,
}

impl GameState {
    /// Returns the seat expected to act, if any.
    #[must_use]
    pub const fn current_player(self) -> Option<usize> {
        match self {
            Self::AwaitingDraw(player) | Self::AwaitingDiscard(player) => Some(player),
            _ => None,
        }
    }

    /// Returns whether no further commands are accepted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won(_) | Self::Exhausted | Self::Halted)
    }

    /// Returns the winning seat, if the game has been won.
    #[must_use]
    pub const fn winner(self) -> Option<usize> {
        match self {
            Self::Won(player) => Some(player),
            _ => None,
        }
    }
}
