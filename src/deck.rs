//! The standard 52-card deck.

use alloc::vec::Vec;
use core::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DealError, DeckError, PileError};
use crate::options::{DealOptions, DealPolicy};
use crate::pile::Pile;

/// A deck holding at most one of each of the 52 cards.
///
/// A new deck is full and sorted. Cards leave the deck through
/// [`deal`](Self::deal) or [`draw`](Self::draw) and can only come back
/// through [`return_card`](Self::return_card), which refuses duplicates.
///
/// The deck has no internal locking; share it across threads behind your
/// own mutex.
///
/// # Example
///
/// ```
/// use card_deck::Deck;
///
/// let mut deck = Deck::new();
/// deck.shuffle_with_seed(7);
/// let hands = deck.deal(3, 5)?;
/// assert_eq!(hands.len(), 3);
/// assert!(hands.iter().all(|hand| hand.len() == 5));
/// assert_eq!(deck.len(), 37);
/// # Ok::<(), card_deck::DealError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pile: Pile,
}

impl Deck {
    /// Creates a full deck in sorted order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self {
            pile: Pile::from(cards),
        }
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    /// Returns an iterator over the cards from bottom to top.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.pile.iter()
    }

    /// Returns the remaining cards as a pile.
    #[must_use]
    pub const fn as_pile(&self) -> &Pile {
        &self.pile
    }

    /// Consumes the deck, returning its remaining cards as a plain pile.
    #[must_use]
    pub fn into_pile(self) -> Pile {
        self.pile
    }

    /// Returns the number of cards left in the deck.
    #[doc(alias = "size")]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// Returns whether the deck holds all 52 cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pile.len() == DECK_SIZE
    }

    /// Returns whether the deck holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.pile.contains(card)
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn peek(&self) -> Result<&Card, PileError> {
        self.pile.peek()
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, PileError> {
        self.pile.pop()
    }

    /// Shuffles the remaining cards with `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        log::debug!("shuffling {} cards", self.pile.len());
        self.pile.shuffle(rng);
    }

    /// Shuffles the remaining cards with a `ChaCha8Rng` seeded from `seed`.
    ///
    /// The same seed on the same deck state always gives the same order.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Restores the remaining cards to sorted order.
    pub fn sort(&mut self) {
        log::debug!("sorting {} cards", self.pile.len());
        self.pile.sort();
    }

    /// Deals `num_hands` hands of `cards_per_hand` cards from the top of the
    /// deck, one card to each hand in turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than
    /// `num_hands * cards_per_hand` cards. The deck is left unchanged.
    pub fn deal(
        &mut self,
        num_hands: usize,
        cards_per_hand: usize,
    ) -> Result<Vec<Pile>, DealError> {
        self.deal_with(DealOptions::new(num_hands, cards_per_hand))
    }

    /// Deals hands according to `options`.
    ///
    /// Cards are drawn from the top; the cards left behind keep their order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer cards than the deal needs.
    /// The deck is left unchanged.
    pub fn deal_with(&mut self, options: DealOptions) -> Result<Vec<Pile>, DealError> {
        let remaining = self.pile.len();
        let requested = options
            .total_cards()
            .filter(|&total| total <= remaining)
            .ok_or_else(|| DealError::InsufficientCards {
                requested: options.hands.saturating_mul(options.cards_per_hand),
                remaining,
            })?;

        log::debug!(
            "dealing {} hands of {} cards ({:?}) from {remaining}",
            options.hands,
            options.cards_per_hand,
            options.policy,
        );

        let mut hands: Vec<Pile> = (0..options.hands).map(|_| Pile::new()).collect();
        // Draw order: topmost card first.
        let drawn = self.pile.take_top(requested).into_iter().rev();

        for (i, card) in drawn.enumerate() {
            let hand = match options.policy {
                DealPolicy::RoundRobin => i % options.hands,
                DealPolicy::Block => i / options.cards_per_hand,
            };
            hands[hand].insert(card);
        }

        Ok(hands)
    }

    /// Puts a card that was dealt back on top of the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck already holds the card.
    pub fn return_card(&mut self, card: Card) -> Result<(), DeckError> {
        if self.pile.contains(&card) {
            return Err(DeckError::DuplicateCard(card));
        }
        self.pile.insert(card);
        Ok(())
    }

    /// Puts every card of `pile` back on top of the deck, bottom card first.
    ///
    /// # Errors
    ///
    /// Returns an error if any card is already in the deck or appears twice in
    /// `pile`. No card is returned in that case.
    pub fn return_pile(&mut self, pile: Pile) -> Result<(), DeckError> {
        for (i, card) in pile.iter().enumerate() {
            if self.pile.contains(card) || pile.cards()[..i].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }
        self.pile.extend(pile);
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pile, f)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.pile.iter()
    }
}

impl PartialEq<Pile> for Deck {
    fn eq(&self, other: &Pile) -> bool {
        self.pile == *other
    }
}
