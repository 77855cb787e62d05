//! Property tests for deck accounting and the chip ledger.

#![allow(clippy::float_cmp)]

use blackjack_core::{Card, CardContainer, ChipLedger, DECK_SIZE, Deck};
use proptest::prelude::*;

fn sorted_indices(cards: &[Card]) -> Vec<usize> {
    let mut indices: Vec<usize> = cards.iter().map(Card::index).collect();
    indices.sort_unstable();
    indices
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>(), drawn in 0..=DECK_SIZE) {
        let mut deck = Deck::new(seed);
        for _ in 0..drawn {
            deck.draw_card();
        }
        let before = sorted_indices(deck.cards());

        deck.shuffle();

        prop_assert_eq!(deck.len(), DECK_SIZE - drawn);
        prop_assert_eq!(sorted_indices(deck.cards()), before);
    }

    #[test]
    fn draw_then_reset_restores_size(seed in any::<u64>(), drawn in 0..=DECK_SIZE, returned in 0..=DECK_SIZE) {
        let mut deck = Deck::shuffled(seed);
        let mut pile = Vec::new();
        for _ in 0..drawn {
            let before = deck.len();
            let card = deck.draw_card();
            prop_assert!(card.is_some());
            prop_assert_eq!(deck.len(), before - 1);
            pile.extend(card);
        }

        let returned = returned.min(pile.len());
        let mut batch = pile.split_off(pile.len() - returned);
        let size = deck.len();
        deck.reset(&mut batch);

        prop_assert!(batch.is_empty());
        prop_assert_eq!(deck.len(), size + returned);
        prop_assert!(deck.check_integrity().is_ok());
    }

    #[test]
    fn wagers_conserve_chips(
        chips in 0u32..10_000,
        first in 0u32..20_000,
        raise in 0u32..20_000,
        double in any::<bool>(),
    ) {
        let chips = f64::from(chips);
        let mut ledger = ChipLedger::new(chips);

        let wagered = ledger.set_bet(f64::from(first));
        prop_assert_eq!(ledger.chips() + wagered, chips);

        let before = ledger.chips();
        let added = ledger.add_bet(f64::from(raise));
        prop_assert_eq!(ledger.chips() + added, before);

        if double {
            let (chips_before, bet_before) = (ledger.chips(), ledger.bet());
            if ledger.double_bet() {
                prop_assert_eq!(ledger.chips(), chips_before - bet_before);
                prop_assert_eq!(ledger.bet(), bet_before * 2.0);
            } else {
                prop_assert_eq!((ledger.chips(), ledger.bet()), (chips_before, bet_before));
            }
        }

        prop_assert!(ledger.chips() >= 0.0);
        prop_assert!(ledger.bet() >= 0.0);
        prop_assert_eq!(ledger.chips() + ledger.bet(), chips);
    }
}
