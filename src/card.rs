//! Card types.

use core::fmt;

use crate::error::CardError;

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        })
    }
}

/// Face card kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Face {
    /// All faces in deck-building order.
    pub const ALL: [Self; 3] = [Self::Jack, Self::Queen, Self::King];
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
        })
    }
}

/// The variant of a card: an ace, a numbered pip card, or a face card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace. Scores 1; a soft hand may promote one ace to 11.
    Ace,
    /// Pip card numbered 2 through 10.
    Pip(u8),
    /// Jack, queen or king. Scores 10.
    Face(Face),
}

impl Rank {
    /// Lowest numbered pip.
    pub const MIN_PIP: u8 = 2;
    /// Highest numbered pip.
    pub const MAX_PIP: u8 = 10;

    /// Returns the base scoring value of this rank.
    ///
    /// Aces count as 1 here; soft-hand promotion happens in
    /// [`Hand::value`](crate::hand::Hand::value).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Pip(n) => n,
            Self::Face(_) => 10,
        }
    }

    const fn is_valid(self) -> bool {
        match self {
            Self::Pip(n) => n >= Self::MIN_PIP && n <= Self::MAX_PIP,
            Self::Ace | Self::Face(_) => true,
        }
    }

    /// Position of this rank within a suit, 0..13.
    const fn ordinal(self) -> usize {
        match self {
            Self::Pip(n) => (n - Self::MIN_PIP) as usize,
            Self::Face(Face::Jack) => 9,
            Self::Face(Face::Queen) => 10,
            Self::Face(Face::King) => 11,
            Self::Ace => 12,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ace => f.write_str("ace"),
            Self::Pip(n) => write!(f, "{n}"),
            Self::Face(face) => face.fmt(f),
        }
    }
}

/// A playing card.
///
/// Cards are immutable once built. Pip cards are validated on construction,
/// so every `Card` in circulation has a rank in the standard set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Creates a card from a suit and rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidPipRank`] if `rank` is a pip outside 2..=10.
    pub const fn new(suit: Suit, rank: Rank) -> Result<Self, CardError> {
        match rank {
            Rank::Pip(n) if !rank.is_valid() => Err(CardError::InvalidPipRank(n)),
            _ => Ok(Self { suit, rank }),
        }
    }

    /// Creates an ace.
    #[must_use]
    pub const fn ace(suit: Suit) -> Self {
        Self {
            suit,
            rank: Rank::Ace,
        }
    }

    /// Creates a face card.
    #[must_use]
    pub const fn face(suit: Suit, face: Face) -> Self {
        Self {
            suit,
            rank: Rank::Face(face),
        }
    }

    /// Creates a pip card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidPipRank`] if `number` is outside 2..=10.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::{Card, CardError, Suit};
    ///
    /// let seven = Card::pip(Suit::Hearts, 7).unwrap();
    /// assert_eq!(seven.rank_value(), 7);
    /// assert_eq!(Card::pip(Suit::Hearts, 11), Err(CardError::InvalidPipRank(11)));
    /// ```
    pub const fn pip(suit: Suit, number: u8) -> Result<Self, CardError> {
        Self::new(suit, Rank::Pip(number))
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the base scoring value (ace 1, face 10, pip its number).
    #[must_use]
    pub const fn rank_value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Dense identity index in 0..[`DECK_SIZE`], unique per suit and rank.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.suit as usize * 13 + self.rank.ordinal()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values() {
        assert_eq!(Card::ace(Suit::Spades).rank_value(), 1);
        assert_eq!(Card::face(Suit::Clubs, Face::Queen).rank_value(), 10);
        for n in 2..=10 {
            assert_eq!(Card::pip(Suit::Hearts, n).map(|c| c.rank_value()), Ok(n));
        }
    }

    #[test]
    fn invalid_pips_rejected() {
        for n in [0, 1, 11, 14, u8::MAX] {
            assert_eq!(
                Card::pip(Suit::Diamonds, n),
                Err(CardError::InvalidPipRank(n))
            );
        }
    }

    #[test]
    fn display_names() {
        use alloc::string::{String, ToString};

        assert_eq!(Card::ace(Suit::Spades).to_string(), "ace of spades");
        assert_eq!(
            Card::face(Suit::Hearts, Face::King).to_string(),
            "king of hearts"
        );
        assert_eq!(
            Card::pip(Suit::Clubs, 10).map(|c| c.to_string()),
            Ok(String::from("10 of clubs"))
        );
    }

    #[test]
    fn index_is_dense() {
        let mut seen = [false; DECK_SIZE];
        for suit in Suit::ALL {
            let mut cards = [Card::ace(suit); 13];
            for (i, n) in (2..=10).enumerate() {
                cards[i] = Card {
                    suit,
                    rank: Rank::Pip(n),
                };
            }
            for (i, face) in Face::ALL.into_iter().enumerate() {
                cards[9 + i] = Card::face(suit, face);
            }
            for card in cards {
                assert!(!seen[card.index()]);
                seen[card.index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
