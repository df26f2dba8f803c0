//! Engine for a single deck blackjack table with one dealer and up to seven players.
//!
//! The crate covers everything needed to resolve a round: the deck, hand values, the
//! player's bet/split/double down/hit-or-stand sequence, the dealer's draw policy and the settlement.
//! Prompting players is left to an implementation of [`Decider`], displaying the table to a [`TableObserver`].

pub mod card;
pub mod config;
pub mod dealer;
pub mod decider;
pub mod deck;
pub mod error;
pub mod hand;
pub mod player;
pub mod settlement;
pub mod table;

pub use card::{Card, Rank, Suit};
pub use config::{TableConfig, TableConfigBuilder};
pub use dealer::Dealer;
pub use decider::{Decider, TableEvent, TableObserver, TableState};
pub use deck::Deck;
pub use error::BlackjackGameError;
pub use hand::Hand;
pub use player::{Player, STARTING_WEALTH};
pub use settlement::{Outcome, Payout, RoundReport, SettlementRecord};
pub use table::{BlackjackTable, MAX_SEATS};
