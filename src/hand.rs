//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::error::HandError;
use crate::options::HandOrder;
use crate::rules::{self, Combination};

/// Maximum number of cards a hand may hold.
pub const MAX_HAND_SIZE: usize = 4;

/// Cards dealt to every player before the first turn.
pub const INITIAL_HAND_SIZE: usize = 3;

/// Selects the card to discard from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardSelector {
    /// Position in the hand, as shown to the player.
    Index(usize),
    /// First card of this rank in hand order.
    Rank(Rank),
}

impl From<usize> for DiscardSelector {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<Rank> for DiscardSelector {
    fn from(rank: Rank) -> Self {
        Self::Rank(rank)
    }
}

/// A player's hand of up to four cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// How cards are ordered after each mutation.
    order: HandOrder,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(order: HandOrder) -> Self {
        Self {
            cards: Vec::new(),
            order,
        }
    }

    /// Adds a card to the hand.
    ///
    /// With [`HandOrder::Sorted`] the hand is re-sorted by rank; with
    /// [`HandOrder::Insertion`] the card goes to the end.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Full`] if the hand already holds four cards.
    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        if self.is_full() {
            return Err(HandError::Full);
        }

        self.cards.push(card);
        if self.order == HandOrder::Sorted {
            self.cards.sort_by_key(|c| c.rank);
        }
        Ok(())
    }

    /// Resolves a selector to a hand position without removing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or no card of the rank
    /// is held.
    pub fn position(&self, selector: DiscardSelector) -> Result<usize, HandError> {
        match selector {
            DiscardSelector::Index(index) if index < self.cards.len() => Ok(index),
            DiscardSelector::Index(index) => Err(HandError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            }),
            DiscardSelector::Rank(rank) => self
                .cards
                .iter()
                .position(|c| c.rank == rank)
                .ok_or(HandError::RankNotHeld(rank)),
        }
    }

    /// Removes and returns the selected card.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector does not match a card in the hand.
    pub fn remove(&mut self, selector: DiscardSelector) -> Result<Card, HandError> {
        let index = self.position(selector)?;
        Ok(self.cards.remove(index))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the ordering policy of the hand.
    #[must_use]
    pub const fn order(&self) -> HandOrder {
        self.order
    }

    /// Returns the winning combination this hand forms, if any.
    ///
    /// A four-card hand is evaluated on its own. A three-card hand is
    /// evaluated together with `pot_top`. Any other size never wins.
    #[must_use]
    pub fn winning_combination(&self, pot_top: Option<Card>) -> Option<Combination> {
        match (self.cards.len(), pot_top) {
            (4, _) => rules::evaluate(&self.cards),
            (3, Some(top)) => {
                let cards = [self.cards[0], self.cards[1], self.cards[2], top];
                rules::evaluate(&cards)
            }
            _ => None,
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds four cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_HAND_SIZE
    }

    /// Removes every card from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new(HandOrder::default())
    }
}
