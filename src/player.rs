//! Players and their discard piles.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;
use crate::hand::Hand;

/// How a seat chooses its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveSource {
    /// Moves come from an external input provider.
    HumanInput,
    /// Moves come from the built-in strategy.
    AiStrategy,
}

/// A seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    source: MoveSource,
    hand: Hand,
    discard_pile: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, source: MoveSource) -> Self {
        Self {
            name: name.into(),
            source,
            hand: Hand::new(),
            discard_pile: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns where the player's moves come from.
    #[must_use]
    pub const fn source(&self) -> MoveSource {
        self.source
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns every card the player has played or discarded, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Moves cards from the hand to the discard pile, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotInHand`] if any card is not held. Neither
    /// the hand nor the discard pile changes in that case.
    pub fn discard(&mut self, cards: &[Card]) -> Result<(), HandError> {
        self.hand.remove(cards)?;
        self.discard_pile.extend_from_slice(cards);
        Ok(())
    }

    /// Adds cards to the hand and re-sorts it.
    pub fn draw(&mut self, cards: &[Card]) {
        self.hand.draw(cards);
        self.hand.sort();
    }

    /// Replaces the hand with a freshly dealt one.
    pub fn take_hand(&mut self, cards: Vec<Card>) {
        self.hand = Hand::from_cards(cards);
    }

    /// Clears the hand and the discard pile.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.discard_pile.clear();
    }
}
