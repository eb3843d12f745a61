//! Error types for card, pile and deck operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when parsing a card from its typeable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text was empty or only whitespace.
    #[error("card name is empty")]
    Empty,
    /// The text does not start with a rank token.
    #[error("card name does not start with a valid rank")]
    InvalidRank,
    /// The rank is not followed by exactly one suit token.
    #[error("card name does not end with a single valid suit")]
    InvalidSuit,
}

/// Errors that can occur when accessing a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The pile has no cards.
    #[error("pile is empty")]
    Empty,
    /// The requested card is not in the pile.
    #[error("card not found in pile")]
    CardNotFound,
    /// The position is past the top of the pile.
    #[error("position {index} is out of bounds for a pile of {len} cards")]
    IndexOutOfBounds {
        /// Requested position.
        index: usize,
        /// Number of cards in the pile.
        len: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards remain in the deck for the requested deal.
    #[error("cannot deal {requested} cards from a deck of {remaining}")]
    InsufficientCards {
        /// Total number of cards the deal asked for (saturated on overflow).
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when returning cards to a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck already holds this card.
    #[error("deck already contains {0}")]
    DuplicateCard(Card),
}
