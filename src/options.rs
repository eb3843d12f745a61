//! Deal configuration options.

/// How dealt cards are partitioned between hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DealPolicy {
    /// One card to each hand in turn, repeated until every hand is full.
    #[default]
    RoundRobin,
    /// Each hand receives its full block of consecutive cards before the
    /// next hand is served.
    Block,
}

/// Configuration for [`Deck::deal_with`](crate::Deck::deal_with).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use card_deck::{DealOptions, DealPolicy};
///
/// let options = DealOptions::new(4, 13).with_policy(DealPolicy::Block);
/// assert_eq!(options.total_cards(), Some(52));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealOptions {
    /// Number of hands to deal.
    pub hands: usize,
    /// Number of cards in each hand.
    pub cards_per_hand: usize,
    /// Partition policy.
    pub policy: DealPolicy,
}

impl Default for DealOptions {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl DealOptions {
    /// Creates options for `hands` hands of `cards_per_hand` cards each,
    /// using the default policy.
    #[must_use]
    pub const fn new(hands: usize, cards_per_hand: usize) -> Self {
        Self {
            hands,
            cards_per_hand,
            policy: DealPolicy::RoundRobin,
        }
    }

    /// Sets the number of hands.
    ///
    /// # Example
    ///
    /// ```
    /// use card_deck::DealOptions;
    ///
    /// let options = DealOptions::default().with_hands(3);
    /// assert_eq!(options.hands, 3);
    /// ```
    #[must_use]
    pub const fn with_hands(mut self, hands: usize) -> Self {
        self.hands = hands;
        self
    }

    /// Sets the number of cards in each hand.
    ///
    /// # Example
    ///
    /// ```
    /// use card_deck::DealOptions;
    ///
    /// let options = DealOptions::default().with_cards_per_hand(7);
    /// assert_eq!(options.cards_per_hand, 7);
    /// ```
    #[must_use]
    pub const fn with_cards_per_hand(mut self, cards_per_hand: usize) -> Self {
        self.cards_per_hand = cards_per_hand;
        self
    }

    /// Sets the partition policy.
    ///
    /// # Example
    ///
    /// ```
    /// use card_deck::{DealOptions, DealPolicy};
    ///
    /// let options = DealOptions::default().with_policy(DealPolicy::Block);
    /// assert_eq!(options.policy, DealPolicy::Block);
    /// ```
    #[must_use]
    pub const fn with_policy(mut self, policy: DealPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the total number of cards the deal removes, or `None` if the
    /// product overflows.
    #[must_use]
    pub const fn total_cards(&self) -> Option<usize> {
        self.hands.checked_mul(self.cards_per_hand)
    }
}
