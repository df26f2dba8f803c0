use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The four suits of a standard deck, in the order the deck is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Diamonds,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
        }
    }
}

/// The thirteen ranks, lowest first. The discriminant is the symbolic rank index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two = 0,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Base blackjack value of the rank, aces count as 11 until a hand softens one.
    pub fn value(&self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            r => *r as u32 + 2,
        }
    }
}

/// An immutable playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Associated function to create a new `Card`.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Symbolic index of the rank, 0 for a two up to 12 for an ace.
    /// Two cards are a splittable pair when these are equal.
    pub fn rank_value(&self) -> usize {
        self.rank as usize
    }

    /// Base blackjack value of the card.
    pub fn value(&self) -> u32 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Human readable description of the card i.e. "Queen of Hearts".
    pub fn describe(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_card_values() {
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).value(), 2);
        assert_eq!(Card::new(Rank::Nine, Suit::Hearts).value(), 9);
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(Card::new(rank, Suit::Spades).value(), 10);
        }
        assert_eq!(Card::new(Rank::Ace, Suit::Diamonds).value(), 11);
    }

    #[test]
    fn test_rank_value_is_symbolic() {
        let ten = Card::new(Rank::Ten, Suit::Clubs);
        let king = Card::new(Rank::King, Suit::Clubs);
        assert_eq!(ten.value(), king.value());
        assert_ne!(ten.rank_value(), king.rank_value());
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).rank_value(), 0);
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).rank_value(), 12);
    }

    #[test]
    fn test_describe() {
        let card = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!(card.describe(), "Queen of Hearts");
        assert_eq!(format!("{}", Card::new(Rank::Ten, Suit::Spades)), "10 of Spades");
    }
}
