//! An object model of a standard 52-card deck with optional `no_std` support.
//!
//! The crate provides [`Card`] values built from a [`Rank`] and a [`Suit`],
//! ordered [`Pile`]s of cards with multiset equality, and a [`Deck`] that
//! starts with all 52 cards and can be shuffled, sorted and dealt into hands.
//!
//! # Example
//!
//! ```
//! use card_deck::{Card, Deck, Pile};
//!
//! let mut deck = Deck::new();
//! deck.shuffle_with_seed(42);
//! let hands = deck.deal(3, 5)?;
//!
//! let mut seen: Pile = hands.into_iter().flatten().collect();
//! seen.extend(deck.iter().copied());
//! assert_eq!(seen, *Deck::new().as_pile());
//!
//! assert_eq!(Card::parse("qs").map(|c| c.to_string()).as_deref(), Some("Queen of Spades"));
//! # Ok::<(), card_deck::DealError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod pile;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, DeckError, ParseCardError, PileError};
pub use options::{DealOptions, DealPolicy};
pub use pile::Pile;
