//! Error types for engine operations.
//!
//! Drawing from an empty container is not an error (it yields `None`), and
//! betting more than the available chips clamps instead of failing.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Pip rank outside 2..=10.
    #[error("pip rank {0} is outside 2..=10")]
    InvalidPipRank(u8),
}

/// Errors reported by deck integrity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card identity appears more than once.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur during table operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}
