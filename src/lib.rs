//! A blackjack rules engine with optional `no_std` support.
//!
//! The crate models a standard deck, hand scoring under blackjack rules
//! (soft aces, bust, natural 21) and a chip ledger for the human player.
//! Deciding round outcomes is left to the caller; a [`Table`] only moves
//! cards between the deck, the players and the discard pile.
//!
//! # Example
//!
//! ```
//! use blackjack_core::{Participant, Table, TableOptions, UserPlayer};
//!
//! let options = TableOptions::default();
//! let mut table = Table::new(options.clone(), 42);
//! let mut user = UserPlayer::with_options("You", &options);
//!
//! user.set_bet(25.0);
//! table.deal_to(&mut user).unwrap();
//! table.deal_to(&mut user).unwrap();
//! assert!(user.hand_value() <= 21);
//!
//! table.collect(&mut user);
//! assert!(user.hand().is_empty());
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
pub mod hand;
pub mod ledger;
pub mod options;
pub mod player;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Rank, Suit};
pub use deck::{CardContainer, Deck};
pub use error::{CardError, DeckError, TableError};
pub use hand::{BLACKJACK, Hand};
pub use ledger::ChipLedger;
pub use options::TableOptions;
pub use player::{Participant, Player, UserPlayer};
pub use table::Table;
