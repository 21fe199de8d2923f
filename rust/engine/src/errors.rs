use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is exhausted")]
    DeckExhausted,
    #[error("Need at least 2 players with chips, got {0}")]
    NotEnoughPlayers(usize),
    #[error("Seat index {index} out of range for {seats} seats")]
    InvalidSeat { index: usize, seats: usize },
    #[error("Cannot check while facing a bet of {owed}")]
    CheckFacingBet { owed: u32 },
    #[error("Raise amount must be positive")]
    ZeroRaise,
    #[error("No active player to act")]
    NoActivePlayer,
    #[error("Hand is over; start the next hand before acting")]
    HandOver,
}
