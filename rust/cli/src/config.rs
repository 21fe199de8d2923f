use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use holdem_ai::Personality;

use crate::error::CliError;

/// Table settings resolved from defaults, an optional TOML file, and
/// `HOLDEM_*` environment variables, in that order (later wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seats at the table, including the human (2..=8).
    pub players: usize,
    pub starting_chips: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Base RNG seed; per-hand deck seeds derive from it. Unset means
    /// OS entropy.
    pub seed: Option<u64>,
    /// Playing style for the AI seats.
    pub personality: Personality,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 4,
            starting_chips: 1_000,
            small_blind: 10,
            big_blind: 20,
            seed: None,
            personality: Personality::Balanced,
        }
    }
}

impl Config {
    /// Loads the file (when given), then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Config, CliError> {
        let mut cfg = match path {
            Some(p) => {
                let text = fs::read_to_string(p)?;
                toml::from_str(&text).map_err(|e| CliError::Config(e.to_string()))?
            }
            None => Config::default(),
        };
        cfg.apply_env(|k| std::env::var(k).ok());
        cfg.validate()?;
        Ok(cfg)
    }

    // Overrides are read through a lookup closure so tests don't touch
    // process state.
    fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, get: F) {
        if let Some(v) = get("HOLDEM_PLAYERS").and_then(|s| s.parse().ok()) {
            self.players = v;
        }
        if let Some(v) = get("HOLDEM_STARTING_CHIPS").and_then(|s| s.parse().ok()) {
            self.starting_chips = v;
        }
        if let Some(v) = get("HOLDEM_SMALL_BLIND").and_then(|s| s.parse().ok()) {
            self.small_blind = v;
        }
        if let Some(v) = get("HOLDEM_BIG_BLIND").and_then(|s| s.parse().ok()) {
            self.big_blind = v;
        }
        if let Some(v) = get("HOLDEM_SEED").and_then(|s| s.parse().ok()) {
            self.seed = Some(v);
        }
        if let Some(v) = get("HOLDEM_PERSONALITY").and_then(|s| s.parse().ok()) {
            self.personality = v;
        }
    }

    pub fn validate(&self) -> Result<(), CliError> {
        if !(2..=8).contains(&self.players) {
            return Err(CliError::Config(format!(
                "players must be between 2 and 8, got {}",
                self.players
            )));
        }
        if self.big_blind == 0 || self.small_blind == 0 {
            return Err(CliError::Config("blinds must be positive".into()));
        }
        if self.small_blind > self.big_blind {
            return Err(CliError::Config(format!(
                "small blind {} exceeds big blind {}",
                self.small_blind, self.big_blind
            )));
        }
        if self.starting_chips < self.big_blind {
            return Err(CliError::Config(
                "starting chips must cover the big blind".into(),
            ));
        }
        Ok(())
    }
}
