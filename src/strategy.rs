//! CPU discard selection.
//!
//! Hard players look at their hand in rank order and try to keep a pair
//! together with an adjacent pair of ranks. The rules are tried in order and
//! the first one that matches decides:
//!
//! 1. lowest two ranks equal: throw one of the top two
//! 2. top two ranks equal: throw one of the lowest two
//! 3. middle two ranks equal: throw the lowest card
//! 4. lowest two adjacent, top two not a pair: throw one of the top two
//! 5. top two adjacent, lowest two not a pair: throw one of the lowest two
//! 6. middle two adjacent, neither end a pair: throw the lowest card
//! 7. otherwise: throw any card
//!
//! Easy players always use rule 7.

use rand::Rng;

use crate::card::Card;
use crate::player::Difficulty;

fn adjacent(low: &Card, high: &Card) -> bool {
    high.rank.value() == low.rank.value() + 1
}

fn either<R: Rng + ?Sized>(rng: &mut R, a: usize, b: usize) -> usize {
    if rng.random_bool(0.5) { a } else { b }
}

/// Picks a position in the rank-sorted hand for a hard CPU.
fn choose_sorted<R: Rng + ?Sized>(sorted: [&Card; 4], rng: &mut R) -> usize {
    let [h0, h1, h2, h3] = sorted;
    let low_pair = h0.rank == h1.rank;
    let high_pair = h2.rank == h3.rank;

    if low_pair {
        either(rng, 2, 3)
    } else if high_pair {
        either(rng, 0, 1)
    } else if h1.rank == h2.rank {
        // Both candidates are the lowest card.
        0
    } else if adjacent(h0, h1) {
        either(rng, 2, 3)
    } else if adjacent(h2, h3) {
        either(rng, 0, 1)
    } else if adjacent(h1, h2) {
        0
    } else {
        rng.random_range(0..4)
    }
}

/// Chooses which card a CPU player discards.
///
/// Returns a position in `hand`. The hand may be in any order; the hard
/// rules are applied to a rank-sorted view and mapped back. Hands that do
/// not hold exactly four cards fall back to a random position, and an empty
/// hand yields `None`.
///
/// ```
/// use pairfollow::{Card, Difficulty, Rank, Suit, strategy::choose_discard};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let hand = [
///     Card::new(Rank::Three, Suit::Hearts),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Seven, Suit::Spades),
///     Card::new(Rank::Eight, Suit::Spades),
/// ];
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let index = choose_discard(&hand, Difficulty::Hard, &mut rng).unwrap();
/// assert!(index >= 2);
/// ```
pub fn choose_discard<R: Rng + ?Sized>(
    hand: &[Card],
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    if hand.is_empty() {
        return None;
    }

    match (difficulty, hand) {
        (Difficulty::Hard, [_, _, _, _]) => {
            let mut order = [0, 1, 2, 3];
            order.sort_by_key(|&i| hand[i].rank);
            let sorted = order.map(|i| &hand[i]);
            Some(order[choose_sorted(sorted, rng)])
        }
        _ => Some(rng.random_range(0..hand.len())),
    }
}
