use std::io::{self, Write};

use holdem_engine::cards::Card;
use holdem_engine::game::{GamePhase, GameState};
use holdem_engine::player::{Player, PlayerAction, PlayerStatus};
use holdem_engine::rules::{legal_actions, min_raise, validate_action};

use crate::config::Config;
use crate::error::CliError;

/// Builds the seats for a new session: seat 0 is the human unless the
/// session is all-AI.
pub fn seat_players(cfg: &Config, all_ai: bool) -> Vec<Player> {
    let names = ["Alice", "Bob", "Charlie", "Dana", "Eve", "Frank", "Grace"];
    (0..cfg.players)
        .map(|i| {
            if i == 0 && !all_ai {
                Player::new("you", "You", cfg.starting_chips, 0, false)
            } else {
                let name = names[(i + names.len() - 1) % names.len()];
                Player::new(format!("ai{}", i), name, cfg.starting_chips, i, true)
            }
        })
        .collect()
}

/// One card, face value only when it is face up (or the viewer owns it).
pub fn format_card(card: &Card, visible: bool) -> String {
    if card.face_up || visible {
        card.to_string()
    } else {
        "🂠".to_string()
    }
}

fn format_cards(cards: &[Card], visible: bool) -> String {
    cards
        .iter()
        .map(|c| format_card(c, visible))
        .collect::<Vec<_>>()
        .join(" ")
}

fn role_tag(p: &Player) -> &'static str {
    if p.is_dealer {
        " (D)"
    } else if p.is_small_blind {
        " (SB)"
    } else if p.is_big_blind {
        " (BB)"
    } else {
        ""
    }
}

fn status_tag(p: &Player) -> &'static str {
    match p.status {
        PlayerStatus::Folded => " folded",
        PlayerStatus::AllIn => " ALL-IN",
        _ => "",
    }
}

/// The whole table as text: phase, board, pot, and one line per seat.
/// Hole cards are shown for `viewer_seat` and for any cards the engine
/// has revealed at showdown.
pub fn render(state: &GameState, viewer_seat: Option<usize>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "--- {:?} | pot {} | bet {} ---\n",
        state.phase, state.pot, state.current_bet
    ));
    if !state.community_cards.is_empty() {
        out.push_str(&format!(
            "board: {}\n",
            format_cards(&state.community_cards, true)
        ));
    }
    for (i, p) in state.players.iter().enumerate() {
        let cursor = if state.phase != GamePhase::Showdown && i == state.active_player_index {
            ">"
        } else {
            " "
        };
        let visible = viewer_seat == Some(i);
        out.push_str(&format!(
            "{} {}{}: {} chips, bet {}{}  {}\n",
            cursor,
            p.name,
            role_tag(p),
            p.chips,
            p.current_bet,
            status_tag(p),
            format_cards(&p.hole_cards, visible),
        ));
    }
    out
}

/// Short description of a seat's action for the event feed.
pub fn describe_action(player: &Player, action: PlayerAction) -> String {
    match action {
        PlayerAction::Fold => format!("{} folds", player.name),
        PlayerAction::Check => format!("{} checks", player.name),
        PlayerAction::Call => format!("{} calls", player.name),
        PlayerAction::Raise(n) => format!("{} raises {}", player.name, n),
        PlayerAction::AllIn => format!("{} is all in", player.name),
    }
}

/// Prompts on stdin until the human picks a legal action. Offered
/// choices come from the rules boundary, and the pick is validated
/// again before it is returned, so an illegal action can never reach
/// the engine.
pub fn prompt_action(state: &GameState) -> Result<PlayerAction, CliError> {
    let offered = legal_actions(state);
    let stdin = io::stdin();
    loop {
        print!("your move [{}]: ", describe_choices(&offered, state));
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // stdin closed: fold rather than hang
            return Ok(PlayerAction::Fold);
        }
        match parse_action(line.trim(), state) {
            Ok(action) => match validate_action(state, action) {
                Ok(()) => return Ok(action),
                Err(e) => println!("{}", e),
            },
            Err(msg) => println!("{}", msg),
        }
    }
}

fn describe_choices(offered: &[PlayerAction], state: &GameState) -> String {
    offered
        .iter()
        .map(|a| match a {
            PlayerAction::Fold => "f=fold".to_string(),
            PlayerAction::Check => "k=check".to_string(),
            PlayerAction::Call => "c=call".to_string(),
            PlayerAction::Raise(_) => format!("r <n>=raise (min {})", min_raise(state)),
            PlayerAction::AllIn => "a=all-in".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses one line of user input into an action.
pub fn parse_action(input: &str, state: &GameState) -> Result<PlayerAction, String> {
    let mut words = input.split_whitespace();
    match words.next() {
        Some("f") | Some("fold") => Ok(PlayerAction::Fold),
        Some("k") | Some("check") => Ok(PlayerAction::Check),
        Some("c") | Some("call") => Ok(PlayerAction::Call),
        Some("a") | Some("allin") | Some("all-in") => Ok(PlayerAction::AllIn),
        Some("r") | Some("raise") => {
            let amount: u32 = words
                .next()
                .ok_or_else(|| format!("raise needs an amount, e.g. 'r {}'", min_raise(state)))?
                .parse()
                .map_err(|_| "raise amount must be a number".to_string())?;
            Ok(PlayerAction::Raise(amount))
        }
        _ => Err("unknown action; try f, k, c, r <n>, or a".to_string()),
    }
}
