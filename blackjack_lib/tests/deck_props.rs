//! Property tests for the deck and hand values.

use blackjack_lib::deck::{DECK_SIZE, STANDARD_CARDS};
use blackjack_lib::{Card, Deck, Hand};
use proptest::prelude::*;

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort();
    cards
}

proptest! {
    /// Property: no matter how many cards are dealt, every pass through the deck deals each of the 52 cards exactly once.
    #[test]
    fn prop_every_pass_deals_each_card_once(seed in any::<u64>(), passes in 1usize..5) {
        let mut deck = Deck::with_seed(seed);
        for _ in 0..passes {
            let pass: Vec<Card> = (0..DECK_SIZE).map(|_| deck.deal()).collect();
            prop_assert_eq!(sorted(&pass), sorted(&STANDARD_CARDS));
        }
        prop_assert_eq!(deck.shuffles(), passes);
    }

    /// Property: shuffling never changes which cards are in the deck.
    #[test]
    fn prop_shuffle_preserves_cards(seed in any::<u64>(), shuffles in 0usize..20, deals in 0usize..200) {
        let mut deck = Deck::with_seed(seed);
        for _ in 0..deals {
            deck.deal();
        }
        for _ in 0..shuffles {
            deck.shuffle();
        }
        prop_assert_eq!(sorted(deck.cards()), sorted(&STANDARD_CARDS));
        prop_assert!(deck.dealt() <= DECK_SIZE);
    }

    /// Property: a hand's value is the raw total, less 10 only when it holds an ace and the raw total is over 21.
    #[test]
    fn prop_hand_value_softens_one_ace_at_most(indices in proptest::collection::vec(0usize..DECK_SIZE, 0..8)) {
        let hand = Hand::from_cards(indices.iter().map(|i| STANDARD_CARDS[*i]));
        let raw: u32 = hand.cards().iter().map(|card| card.value()).sum();
        let has_ace = hand.cards().iter().any(|card| card.is_ace());
        prop_assert_eq!(hand.contains_ace(), has_ace);
        if has_ace && raw > 21 {
            prop_assert_eq!(hand.value(), raw - 10);
        } else {
            prop_assert_eq!(hand.value(), raw);
        }
    }
}
