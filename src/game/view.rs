//! Visibility-filtered snapshots of the table.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::player::{Player, PlayerKind};

use super::{Game, GameState};

/// A hand as seen by a particular viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandView {
    /// The viewer may see the cards.
    Visible(Vec<Card>),
    /// Only the number of cards is shown.
    Hidden(usize),
}

impl HandView {
    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Visible(cards) => cards.len(),
            Self::Hidden(count) => *count,
        }
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One seat as seen by a viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    /// Display name.
    pub name: String,
    /// Who controls the seat.
    pub kind: PlayerKind,
    /// The seat's hand, filtered for the viewer.
    pub hand: HandView,
    /// Whether the seat won the current game.
    pub has_won: bool,
    /// Games won so far.
    pub wins: u32,
}

/// Everything a front end needs to render the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current game state.
    pub state: GameState,
    /// Seat expected to act, if any.
    pub current_player: Option<usize>,
    /// Every seat in turn order.
    pub players: Vec<PlayerView>,
    /// Top card of the pot.
    pub pot_top: Option<Card>,
    /// Number of cards in the pot.
    pub pot_count: usize,
    /// Number of cards left in the deck.
    pub deck_count: usize,
}

fn player_view(player: &Player, visible: bool) -> PlayerView {
    let hand = if visible {
        HandView::Visible(player.hand().cards().to_vec())
    } else {
        HandView::Hidden(player.hand().len())
    };

    PlayerView {
        name: player.name().into(),
        kind: player.kind(),
        hand,
        has_won: player.has_won(),
        wins: player.wins(),
    }
}

impl Game {
    /// Returns the table as seen by `viewer`.
    ///
    /// Only the viewer's own hand is visible while the game is running;
    /// pass `None` for a spectator who sees no hands. Once the game has
    /// ended every hand is revealed.
    pub fn view(&self, viewer: Option<usize>) -> TableView {
        let state = *self.state.lock();
        let players = self.players.lock();
        let deck = self.deck.lock();
        let pot = self.pot.lock();

        let reveal = state.is_terminal();
        let players = players
            .iter()
            .enumerate()
            .map(|(index, player)| player_view(player, reveal || viewer == Some(index)))
            .collect();

        TableView {
            state,
            current_player: state.current_player(),
            players,
            pot_top: pot.top(),
            pot_count: pot.len(),
            deck_count: deck.len(),
        }
    }
}
