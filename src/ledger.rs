//! Chip balance and wager bookkeeping for a human player.

use log::debug;

/// Clamps negative and NaN amounts to zero.
fn non_negative(amount: f64) -> f64 {
    amount.max(0.0)
}

/// A player's chip balance and the bet currently on the table.
///
/// Chips placed on a bet have already left the balance, so for every wagering
/// call `chips_before == chips_after + wagered`. Neither field ever goes
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChipLedger {
    chips: f64,
    bet: f64,
}

impl ChipLedger {
    /// Creates a ledger holding `chips` with no bet placed.
    #[must_use]
    pub fn new(chips: f64) -> Self {
        Self {
            chips: non_negative(chips),
            bet: 0.0,
        }
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> f64 {
        self.chips
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> f64 {
        self.bet
    }

    /// Takes up to `amount` from the balance, going all-in if it falls short.
    fn withdraw(&mut self, amount: f64) -> f64 {
        let amount = non_negative(amount);
        if amount <= self.chips {
            self.chips -= amount;
            amount
        } else {
            let all_in = self.chips;
            debug!("bet of {amount} exceeds {all_in} chips, going all-in");
            self.chips = 0.0;
            all_in
        }
    }

    /// Replaces the bet with `amount`, taken from the chip balance.
    ///
    /// If `amount` exceeds the balance, the whole balance is bet instead. Any
    /// previous bet is overwritten without a refund, so call
    /// [`return_bet`](Self::return_bet) or [`take_bet`](Self::take_bet) first
    /// when one is outstanding.
    ///
    /// Returns the amount actually wagered.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::ChipLedger;
    ///
    /// let mut ledger = ChipLedger::new(100.0);
    /// assert_eq!(ledger.set_bet(150.0), 100.0);
    /// assert_eq!(ledger.chips(), 0.0);
    /// assert_eq!(ledger.bet(), 100.0);
    /// ```
    pub fn set_bet(&mut self, amount: f64) -> f64 {
        let wagered = self.withdraw(amount);
        self.bet = wagered;
        wagered
    }

    /// Raises the bet by `amount`, with the same all-in clamp as
    /// [`set_bet`](Self::set_bet).
    ///
    /// Returns the amount actually added.
    pub fn add_bet(&mut self, amount: f64) -> f64 {
        let wagered = self.withdraw(amount);
        self.bet += wagered;
        wagered
    }

    /// Doubles the bet if the balance can cover it.
    ///
    /// Returns `false`, changing nothing, when the balance is smaller than the
    /// current bet.
    pub fn double_bet(&mut self) -> bool {
        if self.bet <= self.chips {
            self.chips -= self.bet;
            self.bet *= 2.0;
            true
        } else {
            debug!("cannot cover double of {} with {} chips", self.bet, self.chips);
            false
        }
    }

    /// Adds winnings to the balance.
    pub fn add_chips(&mut self, amount: f64) {
        self.chips += non_negative(amount);
    }

    /// Clears the bet and returns it. The chips stay off the balance.
    pub const fn take_bet(&mut self) -> f64 {
        let bet = self.bet;
        self.bet = 0.0;
        bet
    }

    /// Clears the bet, refunding it to the balance.
    pub fn return_bet(&mut self) {
        self.chips += self.take_bet();
    }
}
