use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A player's standing within the current hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStatus {
    /// Still able to act in betting rounds.
    Active,
    /// Out of the hand; also used for busted seats sitting out.
    Folded,
    /// All chips committed; no further actions, still in the showdown pool.
    AllIn,
    /// Seated but not yet dealt in (pre-first-hand only).
    Waiting,
}

/// An action a player can take when it is their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerAction {
    /// Forfeit the hand.
    Fold,
    /// Pass without betting; only legal when no bet is owed.
    Check,
    /// Match the table's current bet (clamped to remaining chips).
    Call,
    /// Add the given amount on top of the player's committed bet,
    /// making their total the new table bet.
    Raise(u32),
    /// Commit all remaining chips.
    AllIn,
}

/// A seat at the table: identity, chip stack, hole cards, and the
/// per-round betting state the state machine drives.
///
/// Conservation invariant: within one hand, `chips` + `current_bet` +
/// chips already folded into the pot equals the stack the player started
/// the hand with. `chips` never goes negative; every debit clamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub chips: u32,
    /// 0 or 2 cards.
    pub hole_cards: Vec<Card>,
    /// Amount committed in the current betting round.
    pub current_bet: u32,
    pub status: PlayerStatus,
    pub is_dealer: bool,
    pub is_small_blind: bool,
    pub is_big_blind: bool,
    pub is_ai: bool,
    /// Fixed seat index for the hand.
    pub position: usize,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, chips: u32, position: usize, is_ai: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            chips,
            hole_cards: Vec::new(),
            current_bet: 0,
            status: PlayerStatus::Waiting,
            is_dealer: false,
            is_small_blind: false,
            is_big_blind: false,
            is_ai,
            position,
        }
    }

    /// Commits up to `amount` chips toward the current round, clamped to
    /// the remaining stack. Adds the amount actually paid to
    /// `current_bet`, flips the player to all-in when the stack hits
    /// zero, and returns the paid amount for the caller to add to the
    /// pot.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.current_bet += paid;
        if self.chips == 0 {
            self.status = PlayerStatus::AllIn;
        }
        paid
    }

    /// Resets the seat for a new hand: hole cards and bet cleared, role
    /// flags dropped, status `Active` for funded seats and `Folded` for
    /// busted ones (they keep the seat and sit out silently).
    pub fn reset_for_hand(&mut self) {
        self.hole_cards.clear();
        self.current_bet = 0;
        self.is_dealer = false;
        self.is_small_blind = false;
        self.is_big_blind = false;
        self.status = if self.chips > 0 {
            PlayerStatus::Active
        } else {
            PlayerStatus::Folded
        };
    }

    /// Whether this player can still win the pot (active or all-in).
    pub fn is_contender(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Whether this player still takes turns in betting rounds.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }
}
