//! Deciding who wins and how a pot divides once hands are evaluated.

use crate::evaluator::RankedHand;
use tracing::debug;

/// Indices of every hand tied for best, ascending. Empty input gives no winners.
///
/// ```
/// use poker_eval::cards::parse_cards;
/// use poker_eval::evaluator::evaluate_best_hand;
/// use poker_eval::showdown::winners;
///
/// let a = evaluate_best_hand(&parse_cards("Kd 4c 10d 9d Kc Qs").unwrap()).unwrap();
/// let b = evaluate_best_hand(&parse_cards("Kh 4h 10d 9d Kc Qs").unwrap()).unwrap();
/// let c = evaluate_best_hand(&parse_cards("2h 3h 10d 9d Kc Qs").unwrap()).unwrap();
/// assert_eq!(winners(&[a, b, c]), vec![0, 1]);
/// ```
pub fn winners(hands: &[RankedHand]) -> Vec<usize> {
    let Some(best) = hands.iter().max() else {
        return Vec::new();
    };
    hands.iter().enumerate().filter(|(_, h)| *h == best).map(|(i, _)| i).collect()
}

/// Split `pot` evenly between `winners` (seat indices at a table of `seats`).
///
/// Leftover chips go one at a time to winners in seat order, starting at
/// `first_seat` (normally the seat left of the dealer) and wrapping around.
/// Returns `(seat, amount)` in that same seat order. Every winner must be a
/// seat index below `seats`.
///
/// ```
/// use poker_eval::showdown::split_pot;
///
/// // dealer on seat 0, so seat 1 is first to collect the odd chip
/// assert_eq!(split_pot(5, &[0, 1], 1, 3), vec![(1, 3), (0, 2)]);
/// ```
pub fn split_pot(
    pot: u64,
    winners: &[usize],
    first_seat: usize,
    seats: usize,
) -> Vec<(usize, u64)> {
    if winners.is_empty() || seats == 0 {
        return Vec::new();
    }
    debug_assert!(winners.iter().all(|&seat| seat < seats), "winner seat out of range");
    let mut ordered = winners.to_vec();
    ordered.sort_by_key(|&seat| (seat + seats - first_seat % seats) % seats);
    ordered.dedup();

    let n = ordered.len() as u64;
    let per = pot / n;
    let mut rem = pot % n;
    if rem > 0 {
        debug!(pot, winners = n, remainder = rem, "odd chips awarded by seat order");
    }
    ordered
        .into_iter()
        .map(|seat| {
            let extra = u64::from(rem > 0);
            rem -= extra;
            (seat, per + extra)
        })
        .collect()
}
