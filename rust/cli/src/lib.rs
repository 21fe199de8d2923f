//! Terminal front end for the hold'em engine: configuration, state
//! rendering, and the interactive game loop live here. This crate holds
//! no game rules; it only displays engine state and forwards chosen
//! actions into it.

pub mod config;
pub mod error;
pub mod table;
