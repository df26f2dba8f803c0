use crate::deck::Deck;
use crate::hand::Hand;
use std::fmt::Display;

/// Wealth every player sits down with unless configured otherwise.
pub const STARTING_WEALTH: u32 = 1000;

/// Struct for a seated player. A player owns one hand, or two after a split, and a wealth balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: usize,
    hands: Vec<Hand>,
    wealth: u32,
    bet: u32,
    splitted: bool,
}

impl Player {
    /// Associated function to create a new `Player` sitting at `seat` with `wealth`.
    pub fn new(seat: usize, wealth: u32) -> Player {
        Player {
            seat,
            hands: vec![Hand::new()],
            wealth,
            bet: 0,
            splitted: false,
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }

    pub fn wealth(&self) -> u32 {
        self.wealth
    }

    /// The bet recorded for the current round, covering every hand the player holds.
    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn splitted(&self) -> bool {
        self.splitted
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub(crate) fn hands_mut(&mut self) -> &mut [Hand] {
        &mut self.hands
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    /// The per hand wager used when settling, the recorded bet divided evenly across the hands.
    pub fn effective_bet(&self) -> u32 {
        self.bet / self.hands.len() as u32
    }

    /// Records the opening bet. Validating it against the player's wealth is left to the table.
    pub(crate) fn place_bet(&mut self, bet: u32) {
        self.bet = bet;
    }

    pub(crate) fn raise_bet(&mut self, increment: u32) {
        self.bet += increment;
    }

    /// Returns true if the player's wealth covers twice the current bet.
    pub fn can_afford_split(&self) -> bool {
        self.bet as u64 * 2 <= self.wealth as u64
    }

    /// Method that implements the logic for splitting.
    /// The pair is divided into two one card hands, each is dealt one new card and the recorded bet doubles.
    /// Returns false without touching the player if they hold no pair or cannot afford it.
    pub fn split(&mut self, deck: &mut Deck) -> bool {
        if self.splitted || self.hands.len() != 1 || !self.hands[0].is_pair() {
            return false;
        }
        if !self.can_afford_split() {
            return false;
        }
        let mut sibling = match self.hands[0].split_off() {
            Some(hand) => hand,
            None => return false,
        };
        self.hands[0].hit(deck);
        sibling.hit(deck);
        self.hands.push(sibling);
        self.bet *= 2;
        self.splitted = true;
        true
    }

    /// Credits a won amount.
    pub(crate) fn collect(&mut self, amount: u32) {
        self.wealth = self.wealth.saturating_add(amount);
    }

    /// Debits a lost amount.
    pub(crate) fn pay(&mut self, amount: u32) {
        self.wealth = self.wealth.saturating_sub(amount);
    }

    /// Method for resetting the player for another round, leaves one empty hand and clears the bet.
    pub fn clear_hands(&mut self) {
        self.hands.truncate(1);
        self.hands[0].clear();
        self.bet = 0;
        self.splitted = false;
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<10}{}\n{:<10}{}\n", "seat:", self.seat, "wealth:", self.wealth)?;
        for (i, hand) in self.hands.iter().enumerate() {
            writeln!(f, "{:<10}{} ({})", format!("hand {}:", i + 1), hand, hand.value())?;
        }
        Ok(())
    }
}
