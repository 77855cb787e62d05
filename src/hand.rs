//! Hand representation and blackjack scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The best total a hand can reach without busting.
pub const BLACKJACK: u16 = 21;

/// Sum of base rank values with every ace counted as 1.
fn raw_total(cards: &[Card]) -> u16 {
    cards
        .iter()
        .fold(0u16, |total, card| total.saturating_add(u16::from(card.rank_value())))
}

/// Returns `(value, soft)` for a sequence of cards.
///
/// One ace is promoted to 11 when the ace-low total is under 12, which is
/// exactly when the extra 10 cannot bust the hand. Only one promotion is ever
/// applied, however many aces are held.
fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let raw = raw_total(cards);
    let soft = cards.iter().any(Card::is_ace) && raw < 12;

    if soft { (raw + 10, true) } else { (raw, false) }
}

/// A hand of cards, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Moves every card into `sink`, leaving the hand empty.
    pub fn drain_into(&mut self, sink: &mut Vec<Card>) {
        sink.append(&mut self.cards);
    }

    /// Total with every ace counted as 1.
    #[must_use]
    pub fn raw_total(&self) -> u16 {
        raw_total(&self.cards)
    }

    /// Calculates the value of the hand.
    ///
    /// Aces count 1, then 10 is added once if the hand is soft.
    #[must_use]
    pub fn value(&self) -> u16 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand holds at least one ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(Card::is_ace)
    }

    /// Returns whether the hand is soft (an ace is being counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand has not bust.
    #[must_use]
    pub fn is_below_limit(&self) -> bool {
        self.value() <= BLACKJACK
    }

    /// Returns whether the hand has bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        !self.is_below_limit()
    }

    /// Returns whether the hand is a natural: two cards, an ace and a ten-value card.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.has_ace() && self.value() == BLACKJACK
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Face, Suit};

    fn pip(n: u8) -> Card {
        Card::pip(Suit::Diamonds, n).unwrap()
    }

    #[test]
    fn empty_hand() {
        assert_eq!(evaluate_cards(&[]), (0, false));
        let hand = Hand::new();
        assert!(!hand.has_ace());
        assert!(hand.is_below_limit());
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn only_one_ace_promoted() {
        let aces = [
            Card::ace(Suit::Clubs),
            Card::ace(Suit::Diamonds),
            Card::ace(Suit::Hearts),
        ];
        assert_eq!(evaluate_cards(&aces), (13, true));
    }

    #[test]
    fn soft_boundary() {
        // ace + 10 = raw 11, soft 21
        assert_eq!(evaluate_cards(&[Card::ace(Suit::Spades), pip(10)]), (21, true));
        // ace + 5 + 6 = raw 12, stays hard
        assert_eq!(
            evaluate_cards(&[Card::ace(Suit::Spades), pip(5), pip(6)]),
            (12, false)
        );
    }

    #[test]
    fn three_card_twenty_one_is_not_blackjack() {
        let hand = Hand::from(alloc::vec![
            Card::ace(Suit::Spades),
            pip(4),
            Card::face(Suit::Hearts, Face::Jack),
        ]);
        assert_eq!(hand.value(), 15);

        let hand = Hand::from(alloc::vec![Card::ace(Suit::Spades), pip(4), pip(6)]);
        assert_eq!(hand.value(), BLACKJACK);
        assert!(!hand.is_blackjack());
    }
}
