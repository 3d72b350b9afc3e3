//! The win-detection rule.
//!
//! A winning hand is four cards made of exactly one pair plus two more ranks
//! that sit next to each other in rank order. Suits never matter.
//!
//! ```
//! use pairfollow::Rank::{Ace, Five, King, Seven, Six, Three, Two, Four};
//! use pairfollow::rules::is_winning_ranks;
//!
//! assert!(is_winning_ranks([Five, Five, Six, Seven]));
//! assert!(is_winning_ranks([Ace, Ace, Two, Three]));
//! assert!(!is_winning_ranks([Ace, Two, Three, Four]));
//! assert!(!is_winning_ranks([Ace, Ace, King, Two]));
//! ```

use crate::card::{Card, Rank};

/// The shape of a winning hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    /// Rank of the pair.
    pub pair: Rank,
    /// The two adjacent ranks, lower first.
    pub run: (Rank, Rank),
}

/// Returns whether two ranks count as adjacent for the win rule.
///
/// Ranks one apart are adjacent. Ace and Two are also listed explicitly;
/// King and Ace are not adjacent.
#[must_use]
pub const fn ranks_adjacent(a: Rank, b: Rank) -> bool {
    let (a, b) = (a.value(), b.value());
    a.abs_diff(b) == 1 || (a == 1 && b == 2) || (a == 2 && b == 1)
}

/// Evaluates four ranks and returns the combination they form, if any.
#[must_use]
pub fn evaluate_ranks(ranks: [Rank; 4]) -> Option<Combination> {
    let mut counts = [0u8; 14];
    for rank in ranks {
        counts[rank.value() as usize] += 1;
    }

    let mut pairs = (1..=13u8).filter(|&v| counts[v as usize] == 2);
    let pair = pairs.next()?;
    if pairs.next().is_some() {
        return None;
    }

    let mut remaining = [0u8; 2];
    let mut len = 0;
    for rank in ranks {
        let value = rank.value();
        if value == pair {
            continue;
        }
        if len == remaining.len() {
            return None;
        }
        remaining[len] = value;
        len += 1;
    }
    if len != 2 {
        return None;
    }

    remaining.sort_unstable();
    let low = Rank::from_value(remaining[0])?;
    let high = Rank::from_value(remaining[1])?;
    if !ranks_adjacent(low, high) {
        return None;
    }

    Some(Combination {
        pair: Rank::from_value(pair)?,
        run: (low, high),
    })
}

/// Returns whether four ranks form a winning combination.
#[must_use]
pub fn is_winning_ranks(ranks: [Rank; 4]) -> bool {
    evaluate_ranks(ranks).is_some()
}

/// Evaluates a set of cards. Anything other than exactly four cards never wins.
#[must_use]
pub fn evaluate(cards: &[Card]) -> Option<Combination> {
    match cards {
        [a, b, c, d] => evaluate_ranks([a.rank, b.rank, c.rank, d.rank]),
        _ => None,
    }
}

/// Returns whether `cards` is a winning hand.
///
/// ```
/// use pairfollow::{is_winning_hand, Card, Rank, Suit};
///
/// let hand = [
///     Card::new(Rank::Nine, Suit::Hearts),
///     Card::new(Rank::Jack, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Clubs),
///     Card::new(Rank::Ten, Suit::Hearts),
/// ];
/// assert!(is_winning_hand(&hand));
/// assert!(!is_winning_hand(&hand[..3]));
/// ```
#[must_use]
pub fn is_winning_hand(cards: &[Card]) -> bool {
    evaluate(cards).is_some()
}
