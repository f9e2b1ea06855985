//! Play shapes and the play validator.

use crate::card::{Card, Rank};

/// Number of same-rank cards that form a bomb.
pub const BOMB_SIZE: usize = 4;

/// The shape of a group of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayKind {
    /// One card.
    Single,
    /// Two cards of one rank.
    Pair,
    /// Three cards of one rank.
    Triple,
    /// Four cards of one rank. Beats any table play.
    Bomb,
    /// Four or more cards that are not a bomb.
    Run,
}

impl PlayKind {
    /// Classifies a group of cards.
    ///
    /// Returns `None` for an empty group and for two or three cards of mixed
    /// rank, which have no playable shape.
    #[must_use]
    pub fn classify(cards: &[Card]) -> Option<Self> {
        match cards.len() {
            0 => None,
            1 => Some(Self::Single),
            2 | 3 => shared_rank(cards).map(|_| {
                if cards.len() == 2 {
                    Self::Pair
                } else {
                    Self::Triple
                }
            }),
            _ if is_bomb(cards) => Some(Self::Bomb),
            _ => Some(Self::Run),
        }
    }
}

/// Returns the rank every card shares, or `None` if ranks differ or the
/// group is empty.
#[must_use]
pub fn shared_rank(cards: &[Card]) -> Option<Rank> {
    let (first, rest) = cards.split_first()?;
    rest.iter()
        .all(|card| card.rank == first.rank)
        .then_some(first.rank)
}

/// Returns whether the cards are exactly four of one rank.
#[must_use]
pub fn is_bomb(cards: &[Card]) -> bool {
    cards.len() == BOMB_SIZE && shared_rank(cards).is_some()
}

fn min_rank(cards: &[Card]) -> Option<Rank> {
    cards.iter().map(|card| card.rank).min()
}

/// Returns whether `proposed` legally beats `table`.
///
/// An empty table accepts anything. Otherwise the proposal must match the
/// table's card count, except that a bomb beats a table of any size. Singles,
/// pairs and triples compare by rank; a pair or triple of mixed ranks is
/// rejected outright. Four or more cards compare by their lowest rank only;
/// the proposal's ranks are not required to be consecutive.
///
/// `proposed` must not be empty. An empty proposal is never valid.
#[must_use]
pub fn is_valid_play(proposed: &[Card], table: &[Card]) -> bool {
    debug_assert!(!proposed.is_empty(), "a proposed play must hold cards");
    if proposed.is_empty() {
        return false;
    }

    if table.is_empty() {
        return true;
    }

    if is_bomb(proposed) {
        return true;
    }

    if proposed.len() != table.len() {
        return false;
    }

    match proposed.len() {
        1 => proposed[0].rank > table[0].rank,
        2 | 3 => shared_rank(proposed).is_some_and(|rank| rank > table[0].rank),
        _ => match (min_rank(proposed), min_rank(table)) {
            (Some(ours), Some(theirs)) => ours > theirs,
            _ => false,
        },
    }
}
