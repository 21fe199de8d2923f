use holdem_ai::{DecisionPolicy, HeuristicPolicy, Personality};
use holdem_engine::deck::Deck;
use holdem_engine::game::{GamePhase, GameState};
use holdem_engine::player::Player;
use holdem_engine::rules::validate_action;

fn seats(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("ai{}", i), format!("Bot {}", i), 1000, i, true))
        .collect()
}

// Plays one full hand with every seat driven by the policy, validating
// each decision at the boundary before applying it.
fn play_hand(mut state: GameState, policies: &mut [HeuristicPolicy]) -> GameState {
    let mut turns = 0;
    while state.phase != GamePhase::Showdown {
        let seat = state.active_player_index;
        let player = state.players[seat].clone();
        let action = policies[seat].decide(&player, &state);
        validate_action(&state, action)
            .unwrap_or_else(|e| panic!("policy proposed illegal {:?}: {}", action, e));
        state = state.process_action(action).expect("legal action applies");
        turns += 1;
        assert!(turns < 500, "hand did not terminate");
    }
    state
}

#[test]
fn policies_never_propose_illegal_actions() {
    for seed in 0..20 {
        let mut policies: Vec<HeuristicPolicy> = (0..4)
            .map(|i| HeuristicPolicy::new_with_seed(Personality::Balanced, seed * 10 + i))
            .collect();
        let state =
            GameState::create_hand_state(seats(4), 0, 10, 20, Deck::new_with_seed(seed)).unwrap();
        let done = play_hand(state, &mut policies);
        let total: u32 = done.players.iter().map(|p| p.chips).sum();
        assert_eq!(total, 4000, "chips conserved (seed {})", seed);
        assert_eq!(done.pot, 0);
    }
}

#[test]
fn all_personalities_play_whole_sessions() {
    let styles = [
        Personality::Balanced,
        Personality::Tight,
        Personality::Loose,
        Personality::Aggressive,
    ];
    let mut policies: Vec<HeuristicPolicy> = styles
        .iter()
        .enumerate()
        .map(|(i, &p)| HeuristicPolicy::new_with_seed(p, i as u64))
        .collect();

    let mut state =
        GameState::create_hand_state(seats(4), 0, 10, 20, Deck::new_with_seed(77)).unwrap();
    for hand in 0..10 {
        state = play_hand(state, &mut policies);
        let funded = state.players.iter().filter(|p| p.chips > 0).count();
        if funded < 2 {
            break;
        }
        state = state.next_hand().unwrap_or_else(|e| panic!("hand {}: {}", hand, e));
    }
    let total: u32 = state.players.iter().map(|p| p.chips).sum();
    assert_eq!(total + state.pot, 4000);
}

#[test]
fn decisions_are_deterministic_for_a_fixed_seed() {
    let state =
        GameState::create_hand_state(seats(4), 0, 10, 20, Deck::new_with_seed(42)).unwrap();
    let player = state.players[state.active_player_index].clone();
    let a = HeuristicPolicy::new_with_seed(Personality::Balanced, 9).decide(&player, &state);
    let b = HeuristicPolicy::new_with_seed(Personality::Balanced, 9).decide(&player, &state);
    assert_eq!(a, b);
}
