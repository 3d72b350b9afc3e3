//! Game configuration options.

/// How a hand orders its cards after a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandOrder {
    /// Ascending by rank after every mutation.
    #[default]
    Sorted,
    /// In the order the cards were received.
    Insertion,
}

/// Minimum number of seats.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of seats.
pub const MAX_PLAYERS: usize = 4;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pairfollow::{GameOptions, HandOrder};
///
/// let options = GameOptions::default()
///     .with_hand_order(HandOrder::Insertion)
///     .with_random_first_player(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Card ordering policy for every hand.
    pub hand_order: HandOrder,
    /// Whether the first player is picked at random instead of seat 0.
    pub random_first_player: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_order: HandOrder::Sorted,
            random_first_player: false,
        }
    }
}

impl GameOptions {
    /// Sets the hand ordering policy.
    ///
    /// # Example
    ///
    /// ```
    /// use pairfollow::{GameOptions, HandOrder};
    ///
    /// let options = GameOptions::default().with_hand_order(HandOrder::Insertion);
    /// assert_eq!(options.hand_order, HandOrder::Insertion);
    /// ```
    #[must_use]
    pub const fn with_hand_order(mut self, order: HandOrder) -> Self {
        self.hand_order = order;
        self
    }

    /// Sets whether the first player is chosen at random.
    ///
    /// # Example
    ///
    /// ```
    /// use pairfollow::GameOptions;
    ///
    /// let options = GameOptions::default().with_random_first_player(true);
    /// assert!(options.random_first_player);
    /// ```
    #[must_use]
    pub const fn with_random_first_player(mut self, random: bool) -> Self {
        self.random_first_player = random;
        self
    }
}
