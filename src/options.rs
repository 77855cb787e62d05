//! Table configuration options.

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_core::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_chips(250.0)
///     .with_reset_threshold(10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Chips a new user player starts with.
    pub starting_chips: f64,
    /// Remaining card count below which the deck should be reset.
    /// 0 to never reset automatically.
    pub reset_threshold: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: 500.0,
            reset_threshold: 15,
        }
    }
}

impl TableOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(1000.0);
    /// assert_eq!(options.starting_chips, 1000.0);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: f64) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the deck reset threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::TableOptions;
    ///
    /// let options = TableOptions::default().with_reset_threshold(20);
    /// assert_eq!(options.reset_threshold, 20);
    /// ```
    #[must_use]
    pub const fn with_reset_threshold(mut self, cards: usize) -> Self {
        self.reset_threshold = cards;
        self
    }
}
