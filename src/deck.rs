//! The 52-card deck and dealt-card tracking.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
use rand::seq::SliceRandom;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, SetupError};
use crate::hand::{Hand, MAX_HAND_SIZE};

/// Cards not currently held by a hand or the pot.
///
/// The deck remembers every card it has dealt so that a card can never be
/// dealt twice and foreign cards can never be recycled into it.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, top first.
    cards: Vec<Card>,
    /// Cards that have left the deck and not come back.
    dealt: HashSet<Card>,
}

impl Deck {
    /// Creates an unshuffled deck of the 52 distinct cards.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        debug_assert_eq!(cards.len(), DECK_SIZE);

        Self {
            cards,
            dealt: HashSet::new(),
        }
    }

    /// Creates a deck holding `cards` in the given order, first card on top.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` is not exactly the 52 distinct cards.
    ///
    /// # Example
    ///
    /// ```
    /// use pairfollow::{Card, Deck, DeckError, Rank, Suit};
    ///
    /// let mut order = Deck::standard().cards().to_vec();
    /// order.reverse();
    /// let deck = Deck::from_cards(order).unwrap();
    /// assert_eq!(deck.cards()[0], Card::new(Rank::King, Suit::Clubs));
    ///
    /// let short = vec![Card::new(Rank::Ace, Suit::Spades)];
    /// assert_eq!(Deck::from_cards(short).unwrap_err(), DeckError::WrongSize(1));
    /// ```
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(cards.len()));
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for &card in &cards {
            if !seen.insert(card) {
                return Err(DeckError::DuplicateCard(card));
            }
        }

        Ok(Self {
            cards,
            dealt: HashSet::new(),
        })
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if the top card is already marked
    /// as dealt. The card is left in place.
    pub fn draw_top(&mut self) -> Result<Option<Card>, DeckError> {
        let Some(&card) = self.cards.first() else {
            return Ok(None);
        };

        if self.dealt.contains(&card) {
            return Err(DeckError::DuplicateCard(card));
        }

        self.cards.remove(0);
        self.dealt.insert(card);
        Ok(Some(card))
    }

    /// Returns previously dealt cards to the deck and reshuffles it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotDealt`] if any card was not dealt from this
    /// deck, or [`DeckError::DuplicateCard`] if a card appears twice in
    /// `cards`. Nothing is changed on error.
    pub fn recycle<R: Rng + ?Sized>(&mut self, cards: &[Card], rng: &mut R) -> Result<(), DeckError> {
        let mut batch = HashSet::with_capacity(cards.len());
        for &card in cards {
            if !self.dealt.contains(&card) {
                return Err(DeckError::NotDealt(card));
            }
            if !batch.insert(card) {
                return Err(DeckError::DuplicateCard(card));
            }
        }

        for card in cards {
            self.dealt.remove(card);
        }
        self.cards.extend_from_slice(cards);
        self.cards.shuffle(rng);
        Ok(())
    }

    /// Deals `count` cards to each hand in seat order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot cover the whole deal or a hand
    /// would be left without room for its first draw. No card is dealt in
    /// that case.
    pub fn deal_initial<'a, I>(&mut self, hands: I, count: usize) -> Result<(), SetupError>
    where
        I: IntoIterator<Item = &'a mut Hand>,
    {
        let mut hands: Vec<&mut Hand> = hands.into_iter().collect();
        if hands.iter().any(|hand| hand.len() + count >= MAX_HAND_SIZE) {
            return Err(SetupError::InvalidHandSize(count));
        }
        if hands.len() * count > self.cards.len() {
            return Err(SetupError::NotEnoughCards);
        }

        for hand in &mut hands {
            for _ in 0..count {
                let card = self.draw_top()?.ok_or(SetupError::NotEnoughCards)?;
                hand.add_card(card)
                    .map_err(|_| SetupError::InvalidHandSize(count))?;
            }
        }
        Ok(())
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether `card` is currently marked as dealt.
    #[must_use]
    pub fn is_dealt(&self, card: &Card) -> bool {
        self.dealt.contains(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
