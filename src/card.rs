//! Card types: ranks, suits and the cards built from them.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card rank, ordered from [`Rank::Two`] up to [`Rank::Ace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the display name of the rank, e.g. `"Queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    /// Returns the canonical typeable token of the rank.
    ///
    /// Number cards use their digits (`"2"` to `"10"`), picture cards and the
    /// ace use their initial.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the face value of the rank (2 for Two up to 14 for Ace).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Parses a rank token, ignoring ASCII case.
    ///
    /// Accepts every canonical token plus `"T"` as an alternative for Ten.
    ///
    /// ```
    /// use card_deck::Rank;
    ///
    /// assert_eq!(Rank::from_token("10"), Some(Rank::Ten));
    /// assert_eq!(Rank::from_token("t"), Some(Rank::Ten));
    /// assert_eq!(Rank::from_token("1"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token == "10" {
            return Some(Self::Ten);
        }
        let mut chars = token.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::from_char(c)
    }

    const fn from_char(c: char) -> Option<Self> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            'T' => Self::Ten,
            'J' => Self::Jack,
            'Q' => Self::Queen,
            'K' => Self::King,
            'A' => Self::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit. The declaration order is the tie-break used when sorting cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the display name of the suit, e.g. `"Spades"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }

    /// Returns the suit symbol used in compact card rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns the typeable token of the suit: the upper-case initial.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    /// Parses a single-character suit token.
    ///
    /// The initial letter is matched case-insensitively; the suit symbol is
    /// accepted too.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' | '♥' => Some(Self::Hearts),
            'D' | '♦' => Some(Self::Diamonds),
            'C' | '♣' => Some(Self::Clubs),
            'S' | '♠' => Some(Self::Spades),
            _ => None,
        }
    }

    /// Parses a suit token consisting of exactly one character.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::from_char(c)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards order by rank first; equal ranks fall back to the suit declaration
/// order so sorting is total and deterministic.
///
/// The default `Display` form is the full name, the alternate form (`{:#}`)
/// is the compact symbol form:
///
/// ```
/// use card_deck::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "Ace of Spades");
/// assert_eq!(format!("{card:#}"), "A♠");
/// assert_eq!(card.typeable_name(), "AS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the typeable name of the card: rank token followed by the suit
    /// letter, e.g. `"10H"` or `"QS"`.
    #[must_use]
    pub fn typeable_name(&self) -> String {
        let mut name = String::with_capacity(3);
        name.push_str(self.rank.token());
        name.push(self.suit.letter());
        name
    }

    /// Parses a card from its typeable name, returning `None` when the text
    /// does not name a card.
    ///
    /// Surrounding whitespace and case are ignored. The rank is read first,
    /// preferring `"10"` over a single character, and whatever follows must
    /// be exactly one suit token.
    ///
    /// ```
    /// use card_deck::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::parse(" 10h "), Some(Card::new(Rank::Ten, Suit::Hearts)));
    /// assert_eq!(Card::parse("5B"), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}{}", self.rank.token(), self.suit.symbol())
        } else {
            write!(f, "{} of {}", self.rank, self.suit)
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseCardError::Empty);
        }

        let (rank, rest) = split_rank(text).ok_or_else(|| {
            log::trace!("rejected card {text:?}: no rank token");
            ParseCardError::InvalidRank
        })?;

        let suit = Suit::from_token(rest.trim_start()).ok_or_else(|| {
            log::trace!("rejected card {text:?}: bad suit token {rest:?}");
            ParseCardError::InvalidSuit
        })?;

        Ok(Self::new(rank, suit))
    }
}

/// Splits a leading rank token off `text`, longest match first.
fn split_rank(text: &str) -> Option<(Rank, &str)> {
    if let Some(rest) = text.strip_prefix("10") {
        return Some((Rank::Ten, rest));
    }
    let mut chars = text.chars();
    let rank = Rank::from_char(chars.next()?)?;
    Some((rank, chars.as_str()))
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();
