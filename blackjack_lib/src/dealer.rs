use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{Hand, BLACKJACK};

/// The dealer keeps drawing while the hand is worth this much or less.
pub const DEALER_DRAWS_TO: u32 = 16;

/// The dealer's side of the table, a single hand played by a fixed draw policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Associated function to create a new `Dealer` with an empty hand.
    pub fn new() -> Dealer {
        Dealer::default()
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Method that deals the dealer's two opening cards, the first of which is shown to the players.
    pub fn deal_opening(&mut self, deck: &mut Deck) -> Card {
        let up_card = self.hand.hit(deck);
        self.hand.hit(deck);
        up_card
    }

    /// The card the players see while they make their decisions.
    pub fn up_card(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }

    /// Returns true while the dealer is required to take another card.
    pub fn must_draw(&self) -> bool {
        self.hand.value() <= DEALER_DRAWS_TO
    }

    /// Method that plays out the dealer's hand. Draws while the value is 16 or less and marks the hand busted if it goes over 21.
    /// Returns the cards drawn.
    pub fn play(&mut self, deck: &mut Deck) -> Vec<Card> {
        let mut drawn = Vec::new();
        while self.must_draw() {
            drawn.push(self.hand.hit(deck));
        }
        if self.hand.value() > BLACKJACK {
            self.hand.mark_busted();
        }
        drawn
    }

    /// Method to reset the hand after a complete round.
    pub fn reset(&mut self) {
        self.hand.clear();
    }
}
