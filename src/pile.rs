//! Ordered card collections with multiset comparison.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Sub};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::Rng;
use rand::seq::SliceRandom;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::error::PileError;

/// Counts how many copies of each card `cards` holds.
fn tally(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::with_capacity(cards.len());
    for &card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    counts
}

/// Walks `cards` in order, matching each card against one remaining count in
/// `counts`. Keeps either the matched or the unmatched cards.
fn filter_matched(
    cards: &[Card],
    mut counts: HashMap<Card, usize>,
    keep_matched: bool,
) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|card| {
            let matched = match counts.get_mut(card) {
                Some(n) if *n > 0 => {
                    *n -= 1;
                    true
                }
                _ => false,
            };
            matched == keep_matched
        })
        .collect()
}

/// An ordered pile of cards.
///
/// The bottom of the pile is index 0; [`insert`](Self::insert) and
/// [`pop`](Self::pop) work at the top. Duplicates are allowed.
///
/// Equality ignores order: two piles are equal when they hold the same cards
/// the same number of times. Iteration and `Display` keep the pile's order.
///
/// ```
/// use card_deck::{Card, Pile, Rank, Suit};
///
/// let a = Card::new(Rank::Ace, Suit::Hearts);
/// let b = Card::new(Rank::Five, Suit::Clubs);
/// assert_eq!(Pile::from([a, b]), Pile::from([b, a]));
/// assert_eq!(Pile::from([a, b]).to_string(), "Ace of Hearts, Five of Clubs");
/// ```
#[derive(Debug, Clone, Default, Eq)]
pub struct Pile {
    /// Cards from bottom to top.
    cards: Vec<Card>,
}

impl Pile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards from bottom to top.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Consumes the pile, returning its cards from bottom to top.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of cards in the pile.
    #[doc(alias = "size")]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Places a card on top of the pile.
    pub fn insert(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Places a card at `index`, shifting the cards above it up.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is greater than the pile length.
    pub fn insert_at(&mut self, index: usize, card: Card) -> Result<(), PileError> {
        let len = self.cards.len();
        if index > len {
            return Err(PileError::IndexOutOfBounds { index, len });
        }
        self.cards.insert(index, card);
        Ok(())
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile is empty.
    pub fn peek(&self) -> Result<&Card, PileError> {
        self.cards.last().ok_or(PileError::Empty)
    }

    /// Returns the card at `index`, counted from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile is empty.
    pub fn pop(&mut self) -> Result<Card, PileError> {
        self.cards.pop().ok_or(PileError::Empty)
    }

    /// Removes the lowest copy of `card` from the pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile does not contain the card.
    pub fn remove(&mut self, card: &Card) -> Result<(), PileError> {
        let index = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(PileError::CardNotFound)?;
        self.cards.remove(index);
        Ok(())
    }

    /// Moves every card of `other` onto the top of this pile, keeping their
    /// order. `other` is left empty.
    pub fn append(&mut self, other: &mut Self) {
        self.cards.append(&mut other.cards);
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns how many copies of `card` the pile holds.
    #[must_use]
    pub fn count(&self, card: &Card) -> usize {
        self.cards.iter().filter(|c| *c == card).count()
    }

    /// Returns whether the pile holds at least one copy of `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Reverses the order of the pile.
    pub fn reverse(&mut self) {
        self.cards.reverse();
    }

    /// Shuffles the pile in place.
    ///
    /// Every permutation is equally likely given a uniform `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Sorts the pile by card order, lowest card at the bottom.
    pub fn sort(&mut self) {
        self.cards.sort_unstable();
    }

    /// Returns the cards of this pile not matched one-for-one by cards of
    /// `other`, in this pile's order.
    ///
    /// ```
    /// use card_deck::{Card, Pile, Rank, Suit};
    ///
    /// let a = Card::new(Rank::Ace, Suit::Hearts);
    /// let b = Card::new(Rank::Two, Suit::Clubs);
    /// let left = Pile::from([a, a, b]).difference(&Pile::from([a]));
    /// assert_eq!(left, Pile::from([a, b]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self::from(filter_matched(&self.cards, tally(&other.cards), false))
    }

    /// Returns the cards of this pile that are matched one-for-one by cards of
    /// `other`, in this pile's order.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from(filter_matched(&self.cards, tally(&other.cards), true))
    }

    /// Returns this pile followed by the cards of `other` it does not already
    /// match. Each card appears as many times as in whichever pile holds more.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut union = self.clone();
        union.cards.extend(other.difference(self).cards);
        union
    }

    /// Returns the cards left over on either side after matching the two
    /// piles one-for-one: this pile's extras followed by `other`'s.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut cards = self.difference(other).cards;
        cards.extend(other.difference(self).cards);
        Self::from(cards)
    }

    /// Splits off the top `n` cards, returned bottom to top.
    ///
    /// The caller guarantees `n <= self.len()`.
    pub(crate) fn take_top(&mut self, n: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(n);
        self.cards.split_off(at)
    }
}

impl PartialEq for Pile {
    fn eq(&self, other: &Self) -> bool {
        self.cards.len() == other.cards.len() && tally(&self.cards) == tally(&other.cards)
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if f.alternate() {
                write!(f, "{card:#}")?;
            } else {
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl From<&[Card]> for Pile {
    fn from(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }
}

impl<const N: usize> From<[Card; N]> for Pile {
    fn from(cards: [Card; N]) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Pile {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Pile {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl Sub for &Pile {
    type Output = Pile;

    fn sub(self, rhs: Self) -> Pile {
        self.difference(rhs)
    }
}

impl BitAnd for &Pile {
    type Output = Pile;

    fn bitand(self, rhs: Self) -> Pile {
        self.intersection(rhs)
    }
}

impl BitOr for &Pile {
    type Output = Pile;

    fn bitor(self, rhs: Self) -> Pile {
        self.union(rhs)
    }
}

impl BitXor for &Pile {
    type Output = Pile;

    fn bitxor(self, rhs: Self) -> Pile {
        self.symmetric_difference(rhs)
    }
}
