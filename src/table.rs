//! Card logistics for a single game session.

extern crate alloc;

use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::deck::{CardContainer, Deck};
use crate::error::TableError;
use crate::options::TableOptions;
use crate::player::Participant;

/// A game session's deck and discard pile.
///
/// The table moves cards between its container, the players' hands and the
/// discard pile. It does not decide who wins a round; a controller does that
/// and settles bets through [`UserPlayer`](crate::player::UserPlayer).
#[derive(Debug, Clone)]
pub struct Table<C: CardContainer = Deck> {
    container: C,
    discard: Vec<Card>,
    options: TableOptions,
}

impl Table<Deck> {
    /// Creates a table with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::{Participant, Player, Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default(), 42);
    /// let mut dealer = Player::new("Dealer");
    /// table.deal_to(&mut dealer).unwrap();
    /// assert_eq!(dealer.hand().len(), 1);
    /// assert_eq!(table.cards_remaining(), 51);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_container(Deck::shuffled(seed), options)
    }
}

impl<C: CardContainer> Table<C> {
    /// Creates a table around an existing container, used as-is.
    #[must_use]
    pub const fn with_container(container: C, options: TableOptions) -> Self {
        Self {
            container,
            discard: Vec::new(),
            options,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the card container.
    #[must_use]
    pub const fn container(&self) -> &C {
        &self.container
    }

    /// Returns the cards discarded since the last reset.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.container.len()
    }

    /// Draws the top card and gives it to `seat`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NoCards`] if the container is empty.
    pub fn deal_to<P: Participant + ?Sized>(&mut self, seat: &mut P) -> Result<Card, TableError> {
        let card = self.container.draw_card().ok_or(TableError::NoCards)?;
        seat.hit(card);
        Ok(card)
    }

    /// Moves `seat`'s hand onto the discard pile.
    pub fn collect<P: Participant + ?Sized>(&mut self, seat: &mut P) {
        seat.discard_hand(&mut self.discard);
    }

    /// Returns whether fewer cards remain than the reset threshold.
    ///
    /// Always `false` when the threshold is 0.
    #[must_use]
    pub fn needs_reset(&self) -> bool {
        self.cards_remaining() < self.options.reset_threshold
    }

    /// Returns the discard pile to the container and reshuffles.
    ///
    /// Collect every hand first: cards still held by players are not
    /// returned.
    pub fn reset_deck(&mut self) {
        debug!(
            "resetting deck: {} remaining, {} discarded",
            self.cards_remaining(),
            self.discard.len()
        );
        self.container.reset(&mut self.discard);
    }

    /// Resets the deck if it has run low.
    ///
    /// This should be called between rounds, after all hands are collected.
    /// Returns `true` if a reset was performed.
    pub fn check_and_reset(&mut self) -> bool {
        if self.needs_reset() {
            self.reset_deck();
            true
        } else {
            false
        }
    }
}
