use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::info;

use holdem_ai::{DecisionPolicy, HeuristicPolicy, Personality};
use holdem_cli::config::Config;
use holdem_cli::error::CliError;
use holdem_cli::table;
use holdem_engine::deck::Deck;
use holdem_engine::game::{GamePhase, GameState};

/// Texas Hold'em at the terminal against AI opponents.
#[derive(Parser, Debug)]
#[command(name = "holdem", version)]
struct Args {
    /// TOML config file (HOLDEM_* env vars override it)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seats at the table, including you (2-8)
    #[arg(long)]
    players: Option<usize>,
    /// Starting stack per seat
    #[arg(long)]
    chips: Option<u32>,
    #[arg(long)]
    small_blind: Option<u32>,
    #[arg(long)]
    big_blind: Option<u32>,
    /// Deterministic session seed (per-hand deck seeds derive from it)
    #[arg(long)]
    seed: Option<u64>,
    /// AI style: balanced, tight, loose, or aggressive
    #[arg(long)]
    personality: Option<Personality>,
    /// Stop after this many hands
    #[arg(long)]
    hands: Option<u64>,
    /// All-AI table with no prompts, for smoke runs
    #[arg(long)]
    auto: bool,
    /// Pause between AI actions, in milliseconds
    #[arg(long, default_value_t = 600)]
    pace_ms: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut cfg = Config::load(args.config.as_deref())?;
    if let Some(v) = args.players {
        cfg.players = v;
    }
    if let Some(v) = args.chips {
        cfg.starting_chips = v;
    }
    if let Some(v) = args.small_blind {
        cfg.small_blind = v;
    }
    if let Some(v) = args.big_blind {
        cfg.big_blind = v;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if let Some(v) = args.personality {
        cfg.personality = v;
    }
    cfg.validate()?;

    let viewer = if args.auto { None } else { Some(0) };
    let players = table::seat_players(&cfg, args.auto);
    let mut policies: Vec<HeuristicPolicy> = (0..cfg.players)
        .map(|i| match cfg.seed {
            Some(s) => HeuristicPolicy::new_with_seed(cfg.personality, s.wrapping_add(i as u64)),
            None => HeuristicPolicy::new(cfg.personality),
        })
        .collect();

    let mut hand_no: u64 = 0;
    let mut state = GameState::create_hand_state(
        players,
        0,
        cfg.small_blind,
        cfg.big_blind,
        session_deck(cfg.seed, hand_no),
    )?;

    loop {
        hand_no += 1;
        println!("\n=== hand {} ===", hand_no);
        let stacks_before: Vec<u32> = state.players.iter().map(|p| p.chips + p.current_bet).collect();

        state = play_hand(state, &mut policies, &args, viewer)?;

        println!("{}", table::render(&state, viewer));
        for (p, &before) in state.players.iter().zip(&stacks_before) {
            if p.chips > before {
                println!("{} wins {} chips", p.name, p.chips - before);
            }
        }

        if args.hands.is_some_and(|max| hand_no >= max) {
            break;
        }
        let funded = state.players.iter().filter(|p| p.chips > 0).count();
        if funded < 2 {
            break;
        }
        if viewer.is_some() && state.players[0].chips == 0 {
            println!("you are out of chips");
            break;
        }
        pause(args.pace_ms * 2);

        let dealer = (state.dealer_index + 1) % state.players.len();
        state = GameState::create_hand_state(
            state.players,
            dealer,
            cfg.small_blind,
            cfg.big_blind,
            session_deck(cfg.seed, hand_no),
        )?;
    }

    println!("\nfinal stacks:");
    for p in &state.players {
        println!("  {}: {}", p.name, p.chips);
    }
    Ok(())
}

// One action at a time until the hand resolves. AI turns are paced for
// readability; the human is prompted with only legal choices.
fn play_hand(
    mut state: GameState,
    policies: &mut [HeuristicPolicy],
    args: &Args,
    viewer: Option<usize>,
) -> Result<GameState, CliError> {
    while !matches!(state.phase, GamePhase::Showdown | GamePhase::Waiting) {
        let seat = state.active_player_index;
        let player = state.players[seat].clone();
        let action = if player.is_ai {
            pause(args.pace_ms);
            policies[seat].decide(&player, &state)
        } else {
            println!("{}", table::render(&state, viewer));
            table::prompt_action(&state)?
        };
        println!("{}", table::describe_action(&player, action));
        info!("hand action: seat {} {:?}", seat, action);

        let street_before = state.phase;
        state = state.process_action(action)?;
        if state.phase != street_before && state.phase != GamePhase::Showdown {
            println!(
                "-- {:?}: {} --",
                state.phase,
                state
                    .community_cards
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
    }
    Ok(state)
}

fn session_deck(seed: Option<u64>, hand_no: u64) -> Deck {
    match seed {
        Some(s) => Deck::new_with_seed(s.wrapping_add(hand_no)),
        None => Deck::new(),
    }
}

fn pause(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}
