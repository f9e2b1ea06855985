//! Move selection for the computer player.
//!
//! The strategy is deterministic and tries, in order:
//!
//! 1. leading its lowest card when the table is empty,
//! 2. any bomb it holds,
//! 3. a same-shaped group that out-ranks the table,
//! 4. a run of consecutive ranks whose lowest card out-ranks the table's,
//!
//! and passes otherwise. The first tier that yields cards wins.

use alloc::vec::Vec;

use crate::card::Card;
use crate::rules::BOMB_SIZE;

/// Chooses the cards to play against `table`, or `None` to pass.
///
/// The returned cards are always taken from `hand`. The engine still
/// validates them; a choice the validator rejects is recorded as a pass.
#[must_use]
pub fn select_play(hand: &[Card], table: &[Card]) -> Option<Vec<Card>> {
    let mut sorted = hand.to_vec();
    sorted.sort();

    if table.is_empty() {
        return sorted.first().map(|&card| alloc::vec![card]);
    }

    find_bomb(&sorted)
        .or_else(|| find_higher_group(&sorted, table))
        .or_else(|| find_run(&sorted, table))
}

fn find_bomb(sorted: &[Card]) -> Option<Vec<Card>> {
    sorted
        .chunk_by(|a, b| a.rank == b.rank)
        .find(|group| group.len() == BOMB_SIZE)
        .map(<[Card]>::to_vec)
}

fn find_higher_group(sorted: &[Card], table: &[Card]) -> Option<Vec<Card>> {
    let size = table.len();
    let table_max = table.iter().map(|card| card.rank).max()?;

    let candidates: Vec<Card> = sorted
        .chunk_by(|a, b| a.rank == b.rank)
        .filter(|group| group.len() == size)
        .flatten()
        .filter(|card| card.rank > table_max)
        .copied()
        .take(size)
        .collect();

    (candidates.len() == size).then_some(candidates)
}

fn find_run(sorted: &[Card], table: &[Card]) -> Option<Vec<Card>> {
    let size = table.len();
    let table_min = table.iter().map(|card| card.rank).min()?;

    sorted
        .windows(size)
        .find(|window| {
            window
                .windows(2)
                .all(|pair| pair[0].rank.successor() == Some(pair[1].rank))
                && window[0].rank > table_min
        })
        .map(<[Card]>::to_vec)
}
