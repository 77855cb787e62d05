//! Players and the hand operations a table controller needs from them.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::trace;

use crate::card::Card;
use crate::hand::Hand;
use crate::ledger::ChipLedger;
use crate::options::TableOptions;

/// Anything seated at the table holding a hand.
///
/// Implementors provide access to a name and hand; hitting, discarding and
/// scoring come for free.
pub trait Participant {
    /// Returns the display name.
    fn name(&self) -> &str;

    /// Returns the hand.
    fn hand(&self) -> &Hand;

    /// Returns the hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Adds a card to the hand.
    fn hit(&mut self, card: Card) {
        trace!("{} hits {card}", self.name());
        self.hand_mut().add_card(card);
    }

    /// Moves every card from the hand into `discard`, leaving the hand empty.
    fn discard_hand(&mut self, discard: &mut Vec<Card>) {
        self.hand_mut().drain_into(discard);
    }

    /// Returns the hand's value, with one ace counted as 11 when that does not bust.
    fn hand_value(&self) -> u16 {
        self.hand().value()
    }

    /// Returns whether the hand holds an ace.
    fn has_ace(&self) -> bool {
        self.hand().has_ace()
    }

    /// Returns whether the hand is soft.
    fn has_soft_hand(&self) -> bool {
        self.hand().is_soft()
    }

    /// Returns whether the hand has not bust.
    fn is_below_limit(&self) -> bool {
        self.hand().is_below_limit()
    }

    /// Returns whether the hand is a natural 21.
    fn has_blackjack(&self) -> bool {
        self.hand().is_blackjack()
    }
}

/// A named player holding a hand, such as the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The human player: a [`Player`] plus a chip ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPlayer {
    player: Player,
    ledger: ChipLedger,
}

impl UserPlayer {
    /// Creates a user player holding `chips`.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: f64) -> Self {
        Self {
            player: Player::new(name),
            ledger: ChipLedger::new(chips),
        }
    }

    /// Creates a user player holding the table's starting chips.
    #[must_use]
    pub fn with_options(name: impl Into<String>, options: &TableOptions) -> Self {
        Self::new(name, options.starting_chips)
    }

    /// Returns the underlying ledger.
    #[must_use]
    pub const fn ledger(&self) -> &ChipLedger {
        &self.ledger
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> f64 {
        self.ledger.chips()
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> f64 {
        self.ledger.bet()
    }

    /// Replaces the bet, going all-in if `amount` exceeds the balance.
    ///
    /// See [`ChipLedger::set_bet`].
    pub fn set_bet(&mut self, amount: f64) -> f64 {
        self.ledger.set_bet(amount)
    }

    /// Raises the bet, going all-in if `amount` exceeds the balance.
    pub fn add_bet(&mut self, amount: f64) -> f64 {
        self.ledger.add_bet(amount)
    }

    /// Doubles the bet if the balance covers it; otherwise does nothing.
    pub fn double_bet(&mut self) -> bool {
        self.ledger.double_bet()
    }

    /// Adds chips to the balance.
    pub fn add_chips(&mut self, amount: f64) {
        self.ledger.add_chips(amount);
    }

    /// Clears the bet and returns it; the chips are not refunded.
    pub const fn take_bet(&mut self) -> f64 {
        self.ledger.take_bet()
    }

    /// Clears the bet and refunds it to the balance.
    pub fn return_bet(&mut self) {
        self.ledger.return_bet();
    }
}

impl Participant for UserPlayer {
    fn name(&self) -> &str {
        self.player.name()
    }

    fn hand(&self) -> &Hand {
        self.player.hand()
    }

    fn hand_mut(&mut self) -> &mut Hand {
        self.player.hand_mut()
    }
}

impl fmt::Display for UserPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.player.fmt(f)
    }
}
