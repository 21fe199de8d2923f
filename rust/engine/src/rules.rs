use crate::errors::GameError;
use crate::game::{GamePhase, GameState};
use crate::player::PlayerAction;

/// The minimum total a raise must add for the active player: cover what
/// is owed plus one big blind on top.
pub fn min_raise(state: &GameState) -> u32 {
    let owed = state
        .active_player()
        .map(|p| state.current_bet.saturating_sub(p.current_bet))
        .unwrap_or(0);
    owed + state.big_blind
}

/// Checks that an action is legal for the current active player. The
/// engine itself applies actions without re-validating intent (it only
/// clamps amounts to stacks), so the betting-controls collaborator is
/// expected to pass every chosen action through here first and only
/// offer actions from [`legal_actions`].
pub fn validate_action(state: &GameState, action: PlayerAction) -> Result<(), GameError> {
    if matches!(state.phase, GamePhase::Waiting | GamePhase::Showdown) {
        return Err(GameError::HandOver);
    }
    let player = state.active_player().ok_or(GameError::NoActivePlayer)?;
    if !player.can_act() {
        return Err(GameError::NoActivePlayer);
    }
    match action {
        PlayerAction::Check => {
            let owed = state.current_bet.saturating_sub(player.current_bet);
            if owed > 0 {
                return Err(GameError::CheckFacingBet { owed });
            }
            Ok(())
        }
        PlayerAction::Raise(0) => Err(GameError::ZeroRaise),
        _ => Ok(()),
    }
}

/// The actions the active player may take right now, for the layer that
/// renders betting controls. `Raise` carries the minimum legal amount;
/// the caller may substitute any larger amount (the engine clamps to
/// the stack either way).
pub fn legal_actions(state: &GameState) -> Vec<PlayerAction> {
    let Some(player) = state.active_player() else {
        return Vec::new();
    };
    if !player.can_act() {
        return Vec::new();
    }
    let owed = state.current_bet.saturating_sub(player.current_bet);

    let mut actions = vec![PlayerAction::Fold];
    if owed == 0 {
        actions.push(PlayerAction::Check);
    } else {
        actions.push(PlayerAction::Call);
    }
    if player.chips > owed {
        actions.push(PlayerAction::Raise(min_raise(state)));
    }
    actions.push(PlayerAction::AllIn);
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::player::Player;

    fn preflop_state() -> GameState {
        let players: Vec<Player> = (0..4)
            .map(|i| Player::new(format!("p{}", i), format!("Seat {}", i), 1000, i, false))
            .collect();
        GameState::create_hand_state(players, 0, 10, 20, Deck::new_with_seed(9)).unwrap()
    }

    #[test]
    fn check_is_rejected_when_a_bet_is_owed() {
        let state = preflop_state();
        // UTG owes the big blind
        assert_eq!(
            validate_action(&state, PlayerAction::Check),
            Err(GameError::CheckFacingBet { owed: 20 })
        );
        assert!(validate_action(&state, PlayerAction::Call).is_ok());
    }

    #[test]
    fn legal_actions_offer_call_not_check_facing_a_bet() {
        let state = preflop_state();
        let actions = legal_actions(&state);
        assert!(actions.contains(&PlayerAction::Call));
        assert!(!actions.contains(&PlayerAction::Check));
        assert!(actions.contains(&PlayerAction::Raise(40)));
    }
}
