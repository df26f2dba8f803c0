use crate::SessionError;
use blackjack_lib::TableConfig;
use serde::Deserialize;
use std::path::Path;

/// Session settings, read from a JSON file and/or the command line.
/// Every field is optional, anything left out falls back to the table defaults.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    pub seats: Option<usize>,
    pub starting_wealth: Option<u32>,
    pub seed: Option<u64>,
    pub shuffle_each_round: Option<bool>,
}

impl GameConfig {
    /// Reads a `GameConfig` from the JSON file at `path`.
    pub fn load(path: &Path) -> Result<GameConfig, SessionError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SessionError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SessionError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns a config where every setting present in `other` replaces the one in `self`.
    pub fn override_with(self, other: GameConfig) -> GameConfig {
        GameConfig {
            seats: other.seats.or(self.seats),
            starting_wealth: other.starting_wealth.or(self.starting_wealth),
            seed: other.seed.or(self.seed),
            shuffle_each_round: other.shuffle_each_round.or(self.shuffle_each_round),
        }
    }
}

impl From<GameConfig> for TableConfig {
    fn from(value: GameConfig) -> Self {
        let mut builder = TableConfig::new();
        if let Some(wealth) = value.starting_wealth {
            builder.starting_wealth(wealth);
        }
        if let Some(seed) = value.seed {
            builder.seed(seed);
        }
        if let Some(shuffle) = value.shuffle_each_round {
            builder.shuffle_each_round(shuffle);
        }
        builder.build()
    }
}
