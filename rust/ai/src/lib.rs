//! # holdem-ai: heuristic opponents for the hold'em engine
//!
//! Decision policies that map (player, game state) to an action. A
//! policy sees its own hole cards plus public state, never another
//! player's cards, and must never produce an action the state machine
//! would treat as illegal: no check while owing chips, and raise
//! amounts beyond the stack degrade to all-in.
//!
//! The built-in [`HeuristicPolicy`] plays simple threshold poker from
//! estimated hand strength and pot odds. It is deliberately not
//! game-theoretically sound; it exists to give the table opponents.

pub mod heuristic;

pub use heuristic::HeuristicPolicy;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use holdem_engine::game::GameState;
use holdem_engine::player::{Player, PlayerAction};

/// Playing style selected by configuration. Never an ignored knob:
/// each variant shifts the policy's thresholds and bet sizing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    /// The reference thresholds.
    #[default]
    Balanced,
    /// Plays fewer hands, folds to pressure sooner.
    Tight,
    /// Plays more hands, calls wider.
    Loose,
    /// Raises more often and larger.
    Aggressive,
}

impl FromStr for Personality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "balanced" => Ok(Personality::Balanced),
            "tight" => Ok(Personality::Tight),
            "loose" => Ok(Personality::Loose),
            "aggressive" => Ok(Personality::Aggressive),
            other => Err(format!("unknown personality '{}'", other)),
        }
    }
}

/// A decision policy for one seat. `decide` is called exactly once per
/// turn by the surrounding game loop; the policy draws its own
/// randomness.
pub trait DecisionPolicy {
    fn name(&self) -> &'static str;
    fn decide(&mut self, player: &Player, state: &GameState) -> PlayerAction;
}
