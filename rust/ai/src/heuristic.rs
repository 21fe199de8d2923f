use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use holdem_engine::game::GameState;
use holdem_engine::hand::evaluate_hand;
use holdem_engine::player::{Player, PlayerAction};

use crate::{DecisionPolicy, Personality};

/// Threshold player driven by estimated hand strength and pot odds,
/// with one uniform random draw per decision for unpredictability.
///
/// Strength tiers (after the personality shift): above 0.75 is strong
/// and raises a randomized pot fraction, above 0.5 calls or probes,
/// above 0.3 calls only cheap bets, below that mostly folds. When the
/// amount to call covers the whole stack the decision collapses to
/// all-in-or-fold weighted by strength and the draw.
#[derive(Debug, Clone)]
pub struct HeuristicPolicy {
    personality: Personality,
    rng: ChaCha20Rng,
}

impl HeuristicPolicy {
    pub fn new(personality: Personality) -> Self {
        Self {
            personality,
            rng: ChaCha20Rng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games and tests.
    pub fn new_with_seed(personality: Personality, seed: u64) -> Self {
        Self {
            personality,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    // Threshold shift: positive plays tighter. Sizing multiplier scales
    // raise amounts.
    fn tuning(&self) -> (f64, f64) {
        match self.personality {
            Personality::Balanced => (0.0, 1.0),
            Personality::Tight => (0.05, 0.9),
            Personality::Loose => (-0.05, 1.0),
            Personality::Aggressive => (-0.05, 1.3),
        }
    }
}

/// Maps the player's current best hand to a strength in [0, 1] using
/// the fixed 10-category table (Royal Flush 1.0 down to High Card
/// 0.25). With fewer than two visible cards the estimate is a flat 0.3.
pub fn hand_strength(player: &Player, state: &GameState) -> f64 {
    let mut cards = player.hole_cards.clone();
    cards.extend_from_slice(&state.community_cards);
    if cards.len() < 2 {
        return 0.3;
    }
    match evaluate_hand(&cards).rank() {
        10 => 1.0,
        9 => 0.95,
        8 => 0.9,
        7 => 0.85,
        6 => 0.75,
        5 => 0.65,
        4 => 0.55,
        3 => 0.45,
        2 => 0.35,
        _ => 0.25,
    }
}

/// Pot odds for the acting player: pot / (pot + amount to call), or 1
/// when there is nothing to call.
pub fn pot_odds(player: &Player, state: &GameState) -> f64 {
    let owed = state.current_bet.saturating_sub(player.current_bet);
    if owed == 0 {
        return 1.0;
    }
    f64::from(state.pot) / f64::from(state.pot + owed)
}

impl DecisionPolicy for HeuristicPolicy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn decide(&mut self, player: &Player, state: &GameState) -> PlayerAction {
        let strength = hand_strength(player, state);
        let odds = pot_odds(player, state);
        let owed = state.current_bet.saturating_sub(player.current_bet);
        let (shift, sizing) = self.tuning();
        let roll: f64 = self.rng.random();

        // Calling would cost the whole stack: all-in or fold.
        if owed >= player.chips {
            let action = if strength > 0.6 || (strength > 0.4 && roll > 0.6) {
                PlayerAction::AllIn
            } else {
                PlayerAction::Fold
            };
            debug!("{}: strength {:.2}, shove-or-fold -> {:?}", player.name, strength, action);
            return action;
        }

        let action = if strength > 0.75 + shift {
            // Strong: raise a randomized pot fraction, occasionally
            // flat-call a bet to disguise the hand.
            if owed == 0 {
                let size = f64::from(state.pot) * (0.5 + roll * 0.5) * sizing;
                raise_or_shove(size as u32, owed, player, state)
            } else if roll > 0.3 {
                let size = f64::from(owed) + f64::from(state.pot) * 0.5 * sizing;
                raise_or_shove(size as u32, owed, player, state)
            } else {
                PlayerAction::Call
            }
        } else if strength > 0.5 + shift {
            if owed == 0 {
                if roll > 0.5 {
                    let size = f64::from(state.big_blind) * (2.0 + roll * 2.0) * sizing;
                    raise_or_shove(size as u32, owed, player, state)
                } else {
                    PlayerAction::Check
                }
            } else if odds > 0.3 || roll > 0.7 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        } else if strength > 0.3 + shift {
            if owed == 0 {
                PlayerAction::Check
            } else if owed < state.big_blind * 2 && roll > 0.5 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        } else if owed == 0 {
            PlayerAction::Check
        } else if owed < state.big_blind && roll > 0.7 {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        };

        debug!(
            "{}: strength {:.2} odds {:.2} owed {} -> {:?}",
            player.name, strength, odds, owed, action
        );
        action
    }
}

// A raise must exceed what is owed by at least a big blind to be a
// raise at all; an amount at or past the stack becomes an all-in.
fn raise_or_shove(amount: u32, owed: u32, player: &Player, state: &GameState) -> PlayerAction {
    let amount = amount.max(owed + state.big_blind);
    if amount >= player.chips {
        PlayerAction::AllIn
    } else {
        PlayerAction::Raise(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::{Card, Rank as R, Suit as S};
    use holdem_engine::deck::Deck;

    fn state_with_seed(seed: u64) -> GameState {
        let players = (0..4)
            .map(|i| Player::new(format!("p{}", i), format!("Seat {}", i), 1000, i, true))
            .collect();
        GameState::create_hand_state(players, 0, 10, 20, Deck::new_with_seed(seed)).unwrap()
    }

    #[test]
    fn preflop_strength_bottoms_out_at_high_card() {
        // two hole cards alone are below the five-card minimum, so the
        // estimate is the high-card floor until the flop arrives
        let state = state_with_seed(3);
        let p = &state.players[state.active_player_index];
        assert_eq!(hand_strength(p, &state), 0.25);
    }

    #[test]
    fn no_visible_cards_gives_the_fixed_preflop_estimate() {
        let state = state_with_seed(3);
        let mut p = state.players[state.active_player_index].clone();
        p.hole_cards.clear();
        assert_eq!(hand_strength(&p, &state), 0.3);
    }

    #[test]
    fn pot_odds_are_one_with_nothing_to_call() {
        let state = state_with_seed(4);
        let bb = state.players.iter().find(|p| p.is_big_blind).unwrap();
        assert_eq!(pot_odds(bb, &state), 1.0);
    }

    #[test]
    fn monster_hands_bet_when_checking_is_free() {
        let mut state = state_with_seed(5);
        state.community_cards = vec![
            Card::new(S::Clubs, R::Ace),
            Card::new(S::Diamonds, R::Ace),
            Card::new(S::Clubs, R::Seven),
        ];
        let mut p = state.players[state.active_player_index].clone();
        p.current_bet = state.current_bet;
        p.hole_cards = vec![
            Card::new(S::Hearts, R::Ace),
            Card::new(S::Spades, R::Ace),
        ];
        for seed in 0..50 {
            let mut ai = HeuristicPolicy::new_with_seed(Personality::Balanced, seed);
            let action = ai.decide(&p, &state);
            assert!(
                matches!(action, PlayerAction::Raise(_) | PlayerAction::AllIn),
                "quad aces should bet, seed {} gave {:?}",
                seed,
                action
            );
        }
    }

    #[test]
    fn facing_a_stack_sized_bet_collapses_to_shove_or_fold() {
        let mut state = state_with_seed(6);
        state.current_bet = 2000;
        let p = state.players[state.active_player_index].clone();
        for seed in 0..50 {
            let mut ai = HeuristicPolicy::new_with_seed(Personality::Aggressive, seed);
            let action = ai.decide(&p, &state);
            assert!(
                matches!(action, PlayerAction::AllIn | PlayerAction::Fold),
                "seed {} gave {:?}",
                seed,
                action
            );
        }
    }
}
