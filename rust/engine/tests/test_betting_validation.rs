use holdem_engine::deck::Deck;
use holdem_engine::errors::GameError;
use holdem_engine::game::GameState;
use holdem_engine::player::{Player, PlayerAction};
use holdem_engine::rules::{legal_actions, min_raise, validate_action};

fn table(chips: &[u32]) -> Vec<Player> {
    chips
        .iter()
        .enumerate()
        .map(|(i, &n)| Player::new(format!("p{}", i), format!("Seat {}", i), n, i, i != 0))
        .collect()
}

fn preflop() -> GameState {
    GameState::create_hand_state(table(&[1000; 4]), 0, 10, 20, Deck::new_with_seed(11)).unwrap()
}

#[test]
fn check_facing_a_bet_is_rejected_at_the_boundary() {
    let state = preflop();
    assert_eq!(
        validate_action(&state, PlayerAction::Check),
        Err(GameError::CheckFacingBet { owed: 20 })
    );
}

#[test]
fn zero_raise_is_rejected() {
    let state = preflop();
    assert_eq!(
        validate_action(&state, PlayerAction::Raise(0)),
        Err(GameError::ZeroRaise)
    );
}

#[test]
fn fold_call_and_all_in_are_always_legal_for_the_actor() {
    let state = preflop();
    for action in [PlayerAction::Fold, PlayerAction::Call, PlayerAction::AllIn] {
        assert!(validate_action(&state, action).is_ok(), "{:?}", action);
    }
}

#[test]
fn no_actions_after_the_hand_ends() {
    let state = preflop()
        .process_action(PlayerAction::Fold)
        .and_then(|s| s.process_action(PlayerAction::Fold))
        .and_then(|s| s.process_action(PlayerAction::Fold))
        .unwrap();
    assert_eq!(
        validate_action(&state, PlayerAction::Check),
        Err(GameError::HandOver)
    );
    assert!(legal_actions(&state).is_empty());
}

#[test]
fn offered_actions_match_what_is_owed() {
    // facing the big blind: call, never check
    let state = preflop();
    let offered = legal_actions(&state);
    assert!(offered.contains(&PlayerAction::Call));
    assert!(offered.contains(&PlayerAction::Fold));
    assert!(offered.contains(&PlayerAction::AllIn));
    assert!(!offered.contains(&PlayerAction::Check));

    // the big blind with no raise behind: check, never call
    let state = state
        .process_action(PlayerAction::Call)
        .and_then(|s| s.process_action(PlayerAction::Call))
        .and_then(|s| s.process_action(PlayerAction::Call))
        .unwrap();
    assert_eq!(state.active_player_index, 2);
    let offered = legal_actions(&state);
    assert!(offered.contains(&PlayerAction::Check));
    assert!(!offered.contains(&PlayerAction::Call));
}

#[test]
fn min_raise_covers_the_owed_amount_plus_a_big_blind() {
    let state = preflop();
    // UTG owes 20 and the big blind is 20
    assert_eq!(min_raise(&state), 40);
    let offered = legal_actions(&state);
    assert!(offered.contains(&PlayerAction::Raise(40)));
}

#[test]
fn raise_is_not_offered_to_a_stack_that_can_only_call() {
    // seat 3 is under the gun with exactly the call amount
    let state =
        GameState::create_hand_state(table(&[1000, 1000, 1000, 20]), 0, 10, 20, Deck::new_with_seed(12))
            .unwrap();
    let offered = legal_actions(&state);
    assert!(!offered.iter().any(|a| matches!(a, PlayerAction::Raise(_))));
    assert!(offered.contains(&PlayerAction::Call));
}
