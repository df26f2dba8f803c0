use crate::card::Card;
use crate::deck::Deck;
use std::fmt::Display;

/// Largest value a hand can hold without busting.
pub const BLACKJACK: u32 = 21;

/// The cards held for one betting unit, in the order they were drawn.
///
/// `busted` is not derived from the cards, the table marks a hand busted at the hit that pushed it over 21.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    contains_ace: bool,
    busted: bool,
}

impl Hand {
    /// Associated function to create a new empty `Hand`.
    pub fn new() -> Hand {
        Hand::default()
    }

    /// Associated function to create a `Hand` already holding `cards`.
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Hand {
        let mut hand = Hand::new();
        for card in cards {
            hand.receive(card);
        }
        hand
    }

    fn receive(&mut self, card: Card) {
        if card.is_ace() {
            self.contains_ace = true;
        }
        self.cards.push(card);
    }

    /// Method that draws the next card from `deck` into the hand, returns the card drawn.
    pub fn hit(&mut self, deck: &mut Deck) -> Card {
        let card = deck.deal();
        self.receive(card);
        card
    }

    /// Computes the value of the hand from scratch.
    /// Aces count as 11, when the hand holds an ace and the total is over 21, 10 is taken off once.
    /// Only a single ace is ever softened, so two aces alone count 12 and three aces with a ten count 33.
    pub fn value(&self) -> u32 {
        let total: u32 = self.cards.iter().map(|card| card.value()).sum();
        if self.contains_ace && total > BLACKJACK {
            total - 10
        } else {
            total
        }
    }

    /// Returns true if the hand is a two card 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns true if the hand holds exactly two cards of the same rank.
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank_value() == self.cards[1].rank_value()
    }

    pub fn contains_ace(&self) -> bool {
        self.contains_ace
    }

    pub fn mark_busted(&mut self) {
        self.busted = true;
    }

    pub fn busted(&self) -> bool {
        self.busted
    }

    /// Method to empty the hand between rounds.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.contains_ace = false;
        self.busted = false;
    }

    /// Splits a two card hand. The first card stays in `self`, the second moves to the returned sibling hand.
    /// Returns `None` and leaves the hand untouched if it does not hold exactly two cards.
    pub fn split_off(&mut self) -> Option<Hand> {
        if self.cards.len() != 2 {
            return None;
        }
        let second = self.cards.pop()?;
        self.contains_ace = self.cards.iter().any(|card| card.is_ace());
        Some(Hand::from_cards([second]))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|card| card.describe())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{}", cards)
    }
}
