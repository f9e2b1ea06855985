//! The shared deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// The undealt cards, in dealing order.
///
/// The deck only shrinks while a game is running. Call [`Deck::initialize`]
/// between games to restore all 52 cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.initialize();
        deck
    }

    /// Creates a deck that deals the given cards in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Refills the deck with one of each card, discarding previous contents.
    pub fn initialize(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the remaining cards with the given random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the first `count` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `count` cards
    /// remain. The deck is left untouched in that case.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..count).collect())
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns the undealt cards in dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the card is still undealt.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
