use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, GameError, InvariantViolation, PotError};
use crate::hand::{DiscardSelector, Hand};
use crate::player::Player;
use crate::result::{DiscardResult, DrawResult};
use crate::rules::Combination;

use super::{Game, GameState, audit, deck_fault, find_winner, halt};

/// Checks that `player` is seated and is the one expected to act.
fn ensure_seat(players: &[Player], current: usize, player: usize) -> Result<(), ActionError> {
    if player >= players.len() {
        return Err(ActionError::PlayerNotFound);
    }
    if player != current {
        return Err(ActionError::NotYourTurn);
    }
    Ok(())
}

/// Returns `hand` as it should look once the card at `index` is gone.
fn expected_after_discard(hand: &Hand, index: usize) -> Vec<Card> {
    let mut cards = hand.cards().to_vec();
    cards.remove(index);
    cards
}

impl Game {
    /// Draws the top card of the deck into the player's hand.
    ///
    /// If the deck is empty, the buried pot cards are recycled into it first.
    /// After the draw every player is checked for a win: the drawing player
    /// with four cards, the others with their three cards plus the pot top.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Action`] if it is not the player's turn to draw,
    /// [`GameError::NoCardsRemain`] if neither deck nor pot can supply a card
    /// (the game becomes [`GameState::Exhausted`]), or
    /// [`GameError::Invariant`] if the engine detects an inconsistency (the
    /// game becomes [`GameState::Halted`]).
    pub fn submit_draw(&self, player: usize) -> Result<DrawResult, GameError> {
        let mut state = self.state.lock();
        let mut players = self.players.lock();

        let current = match *state {
            GameState::AwaitingDraw(current) => current,
            GameState::AwaitingDiscard(current) if current == player => {
                return Err(ActionError::AlreadyDrawn.into());
            }
            GameState::AwaitingDiscard(_) => return Err(ActionError::NotYourTurn.into()),
            _ => return Err(ActionError::InvalidState.into()),
        };
        ensure_seat(&players, current, player)?;
        if players[player].hand().is_full() {
            return Err(ActionError::HandFull.into());
        }

        let mut deck = self.deck.lock();
        let mut pot = self.pot.lock();

        let mut recycled = false;
        if deck.is_empty() {
            match pot.recycle_buried(&mut deck, &mut *self.rng.lock()) {
                Ok(count) => {
                    log::debug!("recycled {count} buried pot cards into the deck");
                    recycled = true;
                }
                Err(PotError::NothingToRecycle) => {
                    log::warn!("no cards left: deck empty and pot has {} card(s)", pot.len());
                    *state = GameState::Exhausted;
                    return Err(GameError::NoCardsRemain);
                }
                Err(PotError::Deck(error)) => return Err(halt(&mut state, deck_fault(error))),
            }
        }

        let card = match deck.draw_top() {
            Ok(Some(card)) => card,
            Ok(None) => {
                *state = GameState::Exhausted;
                return Err(GameError::NoCardsRemain);
            }
            Err(error) => return Err(halt(&mut state, deck_fault(error))),
        };

        let seat = &mut players[player];
        if seat.hand_mut().add_card(card).is_err() {
            return Err(halt(&mut state, InvariantViolation::HandOverflow));
        }
        log::debug!("{} drew {card}", seat.name());

        if let Err(violation) = audit(&players, &deck, &pot) {
            return Err(halt(&mut state, violation));
        }

        if let Some((winner, event)) = find_winner(&players, pot.top()) {
            players[winner].record_win();
            let Combination { pair, run } = event.combination;
            log::info!(
                "{} has won with a pair of {pair} and {}-{}",
                players[winner].name(),
                run.0,
                run.1
            );
            *state = GameState::Won(winner);
            return Ok(DrawResult::Won(event));
        }

        *state = GameState::AwaitingDiscard(player);
        Ok(DrawResult::Drawn { card, recycled })
    }

    /// Discards a card from the player's hand onto the pot.
    ///
    /// After the discard every player is checked for a win, since the new
    /// pot top can complete another player's three-card hand. Without a win
    /// the turn passes to the next seat.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Action`] if it is not the player's turn to
    /// discard or the selected card is not held, or [`GameError::Invariant`]
    /// if the engine detects an inconsistency (the game becomes
    /// [`GameState::Halted`]).
    pub fn submit_discard(
        &self,
        player: usize,
        selector: impl Into<DiscardSelector>,
    ) -> Result<DiscardResult, GameError> {
        let selector = selector.into();
        let mut state = self.state.lock();
        let mut players = self.players.lock();

        let current = match *state {
            GameState::AwaitingDiscard(current) => current,
            GameState::AwaitingDraw(current) if current == player => {
                return Err(ActionError::MustDrawFirst.into());
            }
            GameState::AwaitingDraw(_) => return Err(ActionError::NotYourTurn.into()),
            _ => return Err(ActionError::InvalidState.into()),
        };
        ensure_seat(&players, current, player)?;

        let hand = players[player].hand();
        let index = hand
            .position(selector)
            .map_err(|_| ActionError::NoSuchCard)?;
        let expected = hand.cards()[index];
        let expected_hand = expected_after_discard(hand, index);

        let deck = self.deck.lock();
        let mut pot = self.pot.lock();

        let seat = &mut players[player];
        let card = match seat.hand_mut().remove(DiscardSelector::Index(index)) {
            Ok(card) if card == expected && seat.hand().cards() == expected_hand.as_slice() => card,
            Ok(card) => {
                return Err(halt(
                    &mut state,
                    InvariantViolation::DiscardMismatch {
                        expected,
                        actual: card,
                    },
                ));
            }
            Err(error) => {
                log::error!("selected card vanished from the hand: {error}");
                return Err(halt(
                    &mut state,
                    InvariantViolation::DiscardMismatch {
                        expected,
                        actual: expected,
                    },
                ));
            }
        };
        pot.add(card);
        log::debug!("{} discarded {card}", seat.name());

        if let Err(violation) = audit(&players, &deck, &pot) {
            return Err(halt(&mut state, violation));
        }

        if let Some((winner, event)) = find_winner(&players, pot.top()) {
            players[winner].record_win();
            log::info!(
                "{} has won with {} from the pot",
                players[winner].name(),
                card
            );
            *state = GameState::Won(winner);
            return Ok(DiscardResult::Won(event));
        }

        let next_player = (player + 1) % players.len();
        if next_player == player {
            return Err(halt(&mut state, InvariantViolation::TurnRotation(player)));
        }

        *state = GameState::AwaitingDraw(next_player);
        Ok(DiscardResult::Discarded { card, next_player })
    }
}
