//! # holdem-engine: Texas Hold'em rules engine
//!
//! The rules core for a multi-player Texas Hold'em game: card and deck
//! model, exhaustive best-of-seven hand evaluation, and the betting
//! state machine that sequences actions across streets and awards the
//! pot. The engine is a set of pure, synchronous state transitions over
//! in-memory data; presentation, pacing, and persistence are the
//! caller's business.
//!
//! ## Modules
//!
//! - [`cards`] - Suit, rank, and card vocabulary; 52-card deck contents
//! - [`deck`] - Seedable Fisher-Yates shuffling and sequential dealing
//! - [`hand`] - Hand evaluation (10 categories) and total-order comparison
//! - [`game`] - The betting state machine: blinds, turns, streets, showdown
//! - [`rules`] - Action legality for the betting-controls boundary
//! - [`errors`] - Error types for game operations
//!
//! ## Quick start
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//! use holdem_engine::game::GameState;
//! use holdem_engine::player::{Player, PlayerAction};
//!
//! let players = vec![
//!     Player::new("you", "You", 1_000, 0, false),
//!     Player::new("ai1", "Alice", 1_000, 1, true),
//!     Player::new("ai2", "Bob", 1_000, 2, true),
//! ];
//!
//! // Seat the table, start a hand, and fold the first player to act.
//! let state = GameState::create_hand_state(players, 0, 10, 20, Deck::new_with_seed(42))
//!     .expect("valid table");
//! let state = state.process_action(PlayerAction::Fold).expect("legal action");
//! assert_eq!(state.pot, 30);
//! ```
//!
//! ## Determinism
//!
//! Shuffles come from a ChaCha20 RNG: [`deck::Deck::new_with_seed`]
//! reproduces an exact card order, and [`deck::Deck::stacked`] accepts a
//! scripted order for tests.

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod rules;
