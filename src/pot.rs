//! The discard pile.

extern crate alloc;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::PotError;

/// Discarded cards, oldest first.
///
/// Only the top card is live: it can complete a three-card hand. The buried
/// cards underneath only come back into play through [`Pot::recycle_buried`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pot {
    cards: Vec<Card>,
}

impl Pot {
    /// Creates an empty pot.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Puts a card on top of the pot.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Moves every card but the top back into `deck`, shuffled.
    ///
    /// Returns the number of cards recycled.
    ///
    /// # Errors
    ///
    /// Returns [`PotError::NothingToRecycle`] if the pot holds fewer than two
    /// cards, or the deck's error if it refuses the cards. The pot is left
    /// unchanged on error.
    pub fn recycle_buried<R: Rng + ?Sized>(
        &mut self,
        deck: &mut Deck,
        rng: &mut R,
    ) -> Result<usize, PotError> {
        let Some((&top, buried)) = self.cards.split_last() else {
            return Err(PotError::NothingToRecycle);
        };
        if buried.is_empty() {
            return Err(PotError::NothingToRecycle);
        }

        let mut buried = buried.to_vec();
        buried.shuffle(rng);
        deck.recycle(&buried, rng)?;

        self.cards.clear();
        self.cards.push(top);
        Ok(buried.len())
    }

    /// Returns all cards in the pot, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the pot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
