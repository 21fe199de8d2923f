use holdem_engine::cards::{Card, Rank as R, Suit as S};
use holdem_engine::deck::Deck;
use holdem_engine::game::{GamePhase, GameState};
use holdem_engine::player::{Player, PlayerAction};

fn c(s: S, r: R) -> Card {
    Card::new(s, r)
}

fn table(chips: &[u32]) -> Vec<Player> {
    chips
        .iter()
        .enumerate()
        .map(|(i, &n)| Player::new(format!("p{}", i), format!("Seat {}", i), n, i, i != 0))
        .collect()
}

fn four_handed() -> GameState {
    GameState::create_hand_state(table(&[1000; 4]), 0, 10, 20, Deck::new_with_seed(99)).unwrap()
}

#[test]
fn preflop_turn_order_starts_under_the_gun() {
    let state = four_handed();
    // dealer 0, sb 1, bb 2, so UTG is seat 3
    assert_eq!(state.active_player_index, 3);
    assert_eq!(state.phase, GamePhase::Preflop);
}

#[test]
fn round_completes_only_when_action_returns_to_the_opener() {
    // Everyone calls the big blind; equal bets alone must not end the
    // round, the big blind still has the option.
    let state = four_handed()
        .process_action(PlayerAction::Call) // seat 3 (UTG)
        .and_then(|s| s.process_action(PlayerAction::Call)) // seat 0
        .and_then(|s| s.process_action(PlayerAction::Call)) // seat 1 (sb)
        .unwrap();
    assert_eq!(state.phase, GamePhase::Preflop, "big blind has not acted yet");
    assert_eq!(state.active_player_index, 2, "action is on the big blind");
    assert!(state
        .players
        .iter()
        .all(|p| p.current_bet == state.current_bet));

    // With all bets equal and the cursor about to return to the
    // opener, the next action advances the phase instead of the seat.
    let state = state.process_action(PlayerAction::Check).unwrap();
    assert_eq!(state.phase, GamePhase::Flop);
    assert_eq!(state.community_cards.len(), 3);
    assert_eq!(state.current_bet, 0);
    assert!(state.players.iter().all(|p| p.current_bet == 0));
    // post-flop action opens after the dealer
    assert_eq!(state.active_player_index, 1);
}

#[test]
fn a_raise_keeps_the_round_open_for_players_behind() {
    let state = four_handed()
        .process_action(PlayerAction::Call)
        .and_then(|s| s.process_action(PlayerAction::Call))
        .and_then(|s| s.process_action(PlayerAction::Call))
        .and_then(|s| s.process_action(PlayerAction::Check))
        .unwrap();
    assert_eq!(state.phase, GamePhase::Flop);

    // seat 1 checks, seat 2 raises: seats 3, 0, and 1 all owe a response
    let state = state
        .process_action(PlayerAction::Check)
        .and_then(|s| s.process_action(PlayerAction::Raise(40)))
        .unwrap();
    assert_eq!(state.current_bet, 40);
    assert_eq!(state.phase, GamePhase::Flop);
    assert_eq!(state.active_player_index, 3);

    let state = state
        .process_action(PlayerAction::Call) // seat 3
        .and_then(|s| s.process_action(PlayerAction::Call)) // seat 0
        .and_then(|s| s.process_action(PlayerAction::Call)) // seat 1
        .unwrap();
    assert_eq!(
        state.phase,
        GamePhase::Flop,
        "round ends only at the opener, not mid-cycle"
    );

    // checks around back to the opener finish the street
    let state = state
        .process_action(PlayerAction::Check) // seat 2
        .and_then(|s| s.process_action(PlayerAction::Check)) // seat 3
        .and_then(|s| s.process_action(PlayerAction::Check)) // seat 0
        .unwrap();
    assert_eq!(state.phase, GamePhase::Turn);
    assert_eq!(state.community_cards.len(), 4);
}

#[test]
fn streets_deal_with_one_burn_each() {
    // 4 players: 8 hole cards, then burn+3, burn+1, burn+1.
    let mut state = four_handed();
    assert_eq!(state.deck_remaining(), 44);

    for (expected_phase, expected_remaining) in [
        (GamePhase::Flop, 40),
        (GamePhase::Turn, 38),
        (GamePhase::River, 36),
    ] {
        // call/check around to close the street
        loop {
            let owed = state.current_bet
                - state.players[state.active_player_index].current_bet;
            let action = if owed > 0 {
                PlayerAction::Call
            } else {
                PlayerAction::Check
            };
            state = state.process_action(action).unwrap();
            if state.phase == expected_phase {
                break;
            }
        }
        assert_eq!(state.deck_remaining(), expected_remaining);
    }
}

#[test]
fn folds_down_to_one_player_end_the_hand_immediately() {
    let state = four_handed()
        .process_action(PlayerAction::Fold)
        .and_then(|s| s.process_action(PlayerAction::Fold))
        .and_then(|s| s.process_action(PlayerAction::Fold))
        .unwrap();
    assert_eq!(state.phase, GamePhase::Showdown);
    assert_eq!(state.pot, 0);
    // big blind wins small blind's chips uncontested, without a reveal
    assert_eq!(state.players[2].chips, 1010);
    assert!(state.players[2].hole_cards.iter().all(|c| !c.face_up));
}

#[test]
fn scripted_heads_up_hand_kings_beat_twos() {
    // Seat 1 (small blind) gets pocket kings, seat 0 (big blind) pocket
    // twos, and the board pairs nobody: one pair of kings wins.
    let deck = Deck::stacked(vec![
        c(S::Spades, R::King),  // seat 1, first pass
        c(S::Clubs, R::Two),    // seat 0
        c(S::Hearts, R::King),  // seat 1, second pass
        c(S::Diamonds, R::Two), // seat 0
        c(S::Clubs, R::Eight),  // burn
        c(S::Clubs, R::Three),  // flop
        c(S::Diamonds, R::Seven),
        c(S::Hearts, R::Nine),
        c(S::Clubs, R::Ten), // burn
        c(S::Spades, R::Jack), // turn
        c(S::Diamonds, R::Four), // burn
        c(S::Hearts, R::Five), // river
    ]);
    let state = GameState::create_hand_state(table(&[1000, 1000]), 0, 10, 20, deck).unwrap();
    assert!(state.players[1].is_small_blind);
    assert!(state.players[0].is_big_blind);
    assert_eq!(state.players[1].hole_cards, vec![c(S::Spades, R::King), c(S::Hearts, R::King)]);
    assert_eq!(state.players[0].hole_cards, vec![c(S::Clubs, R::Two), c(S::Diamonds, R::Two)]);

    // small blind completes, big blind checks, then both check down
    let mut state = state
        .process_action(PlayerAction::Call)
        .and_then(|s| s.process_action(PlayerAction::Check))
        .unwrap();
    assert_eq!(state.phase, GamePhase::Flop);
    assert_eq!(state.pot, 40);

    while state.phase != GamePhase::Showdown {
        state = state.process_action(PlayerAction::Check).unwrap();
    }

    assert_eq!(state.pot, 0);
    assert_eq!(state.players[1].chips, 1020, "kings take the pot");
    assert_eq!(state.players[0].chips, 980);
    // both hands revealed at showdown
    assert!(state.players[1].hole_cards.iter().all(|c| c.face_up));
    assert!(state.players[0].hole_cards.iter().all(|c| c.face_up));
    assert_eq!(state.community_cards.len(), 5);
}

#[test]
fn next_hand_carries_stacks_and_rotates_the_button() {
    let state = four_handed()
        .process_action(PlayerAction::Fold)
        .and_then(|s| s.process_action(PlayerAction::Fold))
        .and_then(|s| s.process_action(PlayerAction::Fold))
        .and_then(|s| s.next_hand())
        .unwrap();
    assert_eq!(state.dealer_index, 1);
    assert_eq!(state.phase, GamePhase::Preflop);
    assert_eq!(state.pot, 30);
    let total: u32 = state.players.iter().map(|p| p.chips).sum();
    assert_eq!(total + state.pot, 4000, "chips conserved across hands");
}

#[test]
fn acting_after_showdown_is_an_error() {
    let state = four_handed()
        .process_action(PlayerAction::Fold)
        .and_then(|s| s.process_action(PlayerAction::Fold))
        .and_then(|s| s.process_action(PlayerAction::Fold))
        .unwrap();
    assert!(state.process_action(PlayerAction::Check).is_err());
}
