use crate::card::{Card, Rank, Suit};
use crate::BlackjackGameError;
use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::fmt::Debug;
use tracing::debug;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

lazy_static! {
    /// Every card of a standard deck, one of each rank and suit, built rank by rank.
    pub static ref STANDARD_CARDS: Vec<Card> = Rank::ALL
        .iter()
        .flat_map(|rank| Suit::ALL.iter().map(move |suit| Card::new(*rank, *suit)))
        .collect();
}

/// A single 52 card deck that never runs out.
/// Cards are dealt from a cursor, once every card has been dealt the deck reshuffles itself and the cursor starts over.
pub struct Deck {
    cards: Vec<Card>,
    dealt: usize,
    shuffles: usize,
    rng: StdRng,
}

impl Deck {
    /// Associated function to create a new shuffled `Deck`, seeded from system entropy.
    pub fn new() -> Deck {
        Deck::from_rng(StdRng::from_entropy())
    }

    /// Associated function to create a new shuffled `Deck` whose shuffles are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Deck {
        Deck::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Deck {
        let mut deck = Deck {
            cards: STANDARD_CARDS.clone(),
            dealt: 0,
            shuffles: 0,
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Associated function to create a deck whose next deals are exactly `top`, in order.
    /// The cards not named in `top` follow in a random order derived from `seed`.
    /// The arrangement only lasts until the deck is shuffled again.
    pub fn stacked(top: &[Card], seed: u64) -> Result<Deck, BlackjackGameError> {
        let mut seen = HashSet::with_capacity(top.len());
        for card in top {
            if !seen.insert(*card) {
                return Err(BlackjackGameError::DuplicateCard(*card));
            }
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut rest: Vec<Card> = STANDARD_CARDS
            .iter()
            .filter(|card| !seen.contains(*card))
            .copied()
            .collect();
        rest.shuffle(&mut rng);

        let mut cards = top.to_vec();
        cards.extend(rest);
        Ok(Deck {
            cards,
            dealt: 0,
            shuffles: 0,
            rng,
        })
    }

    /// Method that randomly reorders all 52 cards and resets the cursor.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.dealt = 0;
        self.shuffles += 1;
    }

    /// Method that deals the card at the cursor and advances the cursor.
    /// If all 52 cards have been dealt the deck is shuffled first, so the returned card is the first of a fresh order.
    pub fn deal(&mut self) -> Card {
        if self.dealt >= DECK_SIZE {
            debug!(shuffles = self.shuffles, "deck exhausted, reshuffling");
            self.shuffle();
        }
        let card = self.cards[self.dealt];
        self.dealt += 1;
        card
    }

    /// Number of cards dealt since the last shuffle.
    pub fn dealt(&self) -> usize {
        self.dealt
    }

    /// Number of cards left before the next automatic reshuffle.
    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.dealt
    }

    /// Number of shuffles performed so far, including the one done on construction.
    pub fn shuffles(&self) -> usize {
        self.shuffles
    }

    /// The current order of the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

impl Debug for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck")
            .field("dealt", &self.dealt)
            .field("shuffles", &self.shuffles)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sorted(cards: &[Card]) -> Vec<Card> {
        let mut cards = cards.to_vec();
        cards.sort();
        cards
    }

    #[test]
    fn test_standard_cards() {
        assert_eq!(STANDARD_CARDS.len(), DECK_SIZE);
        let unique: HashSet<Card> = STANDARD_CARDS.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_new_deck_is_shuffled_once() {
        let deck = Deck::with_seed(7);
        assert_eq!(deck.shuffles(), 1);
        assert_eq!(deck.dealt(), 0);
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert_eq!(sorted(deck.cards()), sorted(&STANDARD_CARDS));
    }

    #[test]
    fn test_reshuffle_after_exhaustion() {
        let mut deck = Deck::with_seed(11);
        let mut dealt = Vec::new();
        for _ in 0..DECK_SIZE {
            dealt.push(deck.deal());
        }
        // A full pass deals every card exactly once, without reshuffling
        assert_eq!(deck.shuffles(), 1);
        assert_eq!(deck.dealt(), DECK_SIZE);
        assert_eq!(sorted(&dealt), sorted(&STANDARD_CARDS));

        let card = deck.deal();
        assert_eq!(deck.shuffles(), 2);
        assert_eq!(deck.dealt(), 1);
        assert_eq!(card, deck.cards()[0]);
        assert_eq!(sorted(deck.cards()), sorted(&STANDARD_CARDS));
    }

    #[test]
    fn test_shuffle_resets_cursor() {
        let mut deck = Deck::with_seed(3);
        deck.deal();
        deck.deal();
        deck.shuffle();
        assert_eq!(deck.dealt(), 0);
        assert_eq!(deck.shuffles(), 2);
    }

    #[test]
    fn test_seeded_decks_match() {
        let mut a = Deck::with_seed(42);
        let mut b = Deck::with_seed(42);
        for _ in 0..100 {
            assert_eq!(a.deal(), b.deal());
        }
    }

    #[test]
    fn test_stacked_deck() {
        let top = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Two, Suit::Clubs),
        ];
        let mut deck = Deck::stacked(&top, 1).expect("distinct cards");
        assert_eq!(deck.deal(), top[0]);
        assert_eq!(deck.deal(), top[1]);
        assert_eq!(deck.deal(), top[2]);
        assert_eq!(sorted(deck.cards()), sorted(&STANDARD_CARDS));
    }

    #[test]
    fn test_stacked_deck_rejects_duplicates() {
        let card = Card::new(Rank::Eight, Suit::Diamonds);
        match Deck::stacked(&[card, card], 1) {
            Err(BlackjackGameError::DuplicateCard(c)) => assert_eq!(c, card),
            other => panic!("expected a duplicate card error, got {:?}", other),
        }
    }
}
