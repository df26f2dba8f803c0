use crate::player::STARTING_WEALTH;
use serde::{Deserialize, Serialize};

/// Struct for configuring a `BlackjackTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub starting_wealth: u32,
    pub seed: Option<u64>,
    pub shuffle_each_round: bool,
}

impl TableConfig {
    /// Associated method for returning a new `TableConfigBuilder` object.
    /// Allows customization of the players' starting wealth, the deck's seed and whether the deck is reshuffled before every round.
    pub fn new() -> TableConfigBuilder {
        TableConfigBuilder {
            starting_wealth: None,
            seed: None,
            shuffle_each_round: None,
        }
    }
}

impl Default for TableConfig {
    /// Returns the standard configuration, 1000 starting wealth, an unseeded deck shuffled before every round.
    fn default() -> Self {
        TableConfig::new().build()
    }
}

/// Struct to implement builder pattern for `TableConfig`
#[derive(Debug, Clone, Copy)]
pub struct TableConfigBuilder {
    starting_wealth: Option<u32>,
    seed: Option<u64>,
    shuffle_each_round: Option<bool>,
}

impl TableConfigBuilder {
    /// Method for changing the wealth each player sits down with.
    pub fn starting_wealth(&mut self, wealth: u32) -> &mut Self {
        self.starting_wealth = Some(wealth);
        self
    }

    /// Method for seeding the deck so a session can be replayed.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Method for setting whether the deck is reshuffled before every round after the first.
    pub fn shuffle_each_round(&mut self, shuffle: bool) -> &mut Self {
        self.shuffle_each_round = Some(shuffle);
        self
    }

    /// Method for building a `TableConfig` object from the given `TableConfigBuilder` object.
    pub fn build(&mut self) -> TableConfig {
        TableConfig {
            starting_wealth: self.starting_wealth.unwrap_or(STARTING_WEALTH),
            seed: self.seed,
            shuffle_each_round: self.shuffle_each_round.unwrap_or(true),
        }
    }
}
