//! The card container capability and the standard 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use log::{debug, trace, warn};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Face, Suit};
use crate::error::DeckError;

/// Something cards can be drawn from, shuffled, and refilled.
///
/// [`Deck`] is the standard implementation; any other type providing these
/// operations (a stacked test deck, a multi-deck shoe) can be used in its
/// place by a [`Table`](crate::table::Table).
pub trait CardContainer {
    /// Removes and returns the top card, or `None` if the container is empty.
    fn draw_card(&mut self) -> Option<Card>;

    /// Returns the number of cards remaining.
    fn len(&self) -> usize;

    /// Returns whether no cards remain.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Puts the current contents in a uniformly random order.
    fn shuffle(&mut self);

    /// Moves every card out of `discarded` into this container, then shuffles.
    ///
    /// The caller must only pass cards that were drawn from this container
    /// and are no longer held anywhere else. Duplicates are not rejected.
    fn reset(&mut self, discarded: &mut Vec<Card>);
}

/// A standard deck of playing cards with its own seeded RNG.
///
/// The top of the deck is the end of the internal sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full 52-card deck in canonical (unshuffled) order.
    ///
    /// For each suit: pips 2 through 10, jack, queen, king, then the ace.
    /// `seed` drives every later [`shuffle`](CardContainer::shuffle).
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::{CardContainer, Deck, DECK_SIZE};
    ///
    /// let deck = Deck::new(7);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: Self::standard_cards(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a full deck and shuffles it once.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new(seed);
        deck.shuffle();
        deck
    }

    fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for number in 2..=10 {
                if let Ok(card) = Card::pip(suit, number) {
                    cards.push(card);
                }
            }
            for face in Face::ALL {
                cards.push(Card::face(suit, face));
            }
            cards.push(Card::ace(suit));
        }

        cards
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks that no card identity appears twice.
    ///
    /// [`reset`](CardContainer::reset) trusts its caller; this lets a caller
    /// verify that trust was warranted.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] with the first repeated card found.
    pub fn check_integrity(&self) -> Result<(), DeckError> {
        let mut seen = [false; DECK_SIZE];
        for card in &self.cards {
            let slot = &mut seen[card.index()];
            if *slot {
                return Err(DeckError::DuplicateCard(*card));
            }
            *slot = true;
        }
        Ok(())
    }
}

impl CardContainer for Deck {
    fn draw_card(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        trace!("drew {card:?}, {} left", self.cards.len());
        card
    }

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn shuffle(&mut self) {
        // Fisher-Yates
        self.cards.shuffle(&mut self.rng);
        debug!("shuffled deck of {} cards", self.cards.len());
    }

    fn reset(&mut self, discarded: &mut Vec<Card>) {
        let returned = discarded.len();
        self.cards.append(discarded);

        if self.cards.len() > DECK_SIZE {
            warn!(
                "deck holds {} cards after reset; duplicate cards were returned",
                self.cards.len()
            );
        }
        debug!("returned {returned} cards to the deck");

        self.shuffle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order() {
        let deck = Deck::new(0);
        let cards = deck.cards();
        assert_eq!(cards.first(), Card::pip(Suit::Clubs, 2).ok().as_ref());
        assert_eq!(cards[9], Card::face(Suit::Clubs, Face::Jack));
        assert_eq!(cards[12], Card::ace(Suit::Clubs));
        assert_eq!(cards.last(), Some(&Card::ace(Suit::Spades)));
    }

    #[test]
    fn same_seed_same_shuffle() {
        assert_eq!(Deck::shuffled(99).cards(), Deck::shuffled(99).cards());
        assert_ne!(Deck::shuffled(1).cards(), Deck::new(1).cards());
    }

    #[test]
    fn integrity_flags_duplicates() {
        let mut deck = Deck::new(3);
        assert_eq!(deck.check_integrity(), Ok(()));

        let mut bogus = alloc::vec![Card::ace(Suit::Hearts)];
        deck.reset(&mut bogus);
        assert!(bogus.is_empty());
        assert_eq!(
            deck.check_integrity(),
            Err(DeckError::DuplicateCard(Card::ace(Suit::Hearts)))
        );
    }
}
