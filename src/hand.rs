//! A player's hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{HandError, SelectionError};

/// The cards a player holds.
///
/// Hands are kept sorted by rank, then suit, so that card indices shown to a
/// human stay meaningful between turns. [`Hand::draw`] is the one operation
/// that leaves the hand unsorted; call [`Hand::sort`] afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a sorted hand from the given cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    /// Sorts the hand by rank, then suit.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Appends cards to the hand without re-sorting.
    pub fn draw(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
    }

    /// Removes the given cards from the hand.
    ///
    /// Either every card is removed or none is.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotInHand`] for the first card that is not held.
    pub fn remove(&mut self, cards: &[Card]) -> Result<(), HandError> {
        let mut remaining = self.cards.clone();
        for card in cards {
            let position = remaining
                .iter()
                .position(|held| held == card)
                .ok_or(HandError::CardNotInHand(*card))?;
            remaining.remove(position);
        }

        self.cards = remaining;
        Ok(())
    }

    /// Resolves hand indices to cards, in the order the indices were given.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of range or repeated.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<Card>, SelectionError> {
        let mut selected = Vec::with_capacity(indices.len());
        for (position, &index) in indices.iter().enumerate() {
            if index >= self.cards.len() {
                return Err(SelectionError::CardIndexOutOfRange {
                    index,
                    len: self.cards.len(),
                });
            }
            if indices[..position].contains(&index) {
                return Err(SelectionError::DuplicateIndex(index));
            }
            selected.push(self.cards[index]);
        }
        Ok(selected)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
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

    /// Empties the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
