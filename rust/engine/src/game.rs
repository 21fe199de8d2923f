use std::cmp::Ordering;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{compare_hands, evaluate_hand, HandRanking};
use crate::player::{Player, PlayerAction, PlayerStatus};

/// The phases of a hand. `Waiting` only exists before the first hand;
/// `Showdown` is terminal for the hand, after which the caller derives
/// the next one via [`GameState::next_hand`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Waiting,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

/// The authoritative state of one hand of Texas Hold'em.
///
/// All transitions consume the state by value and return the successor,
/// so a caller can never hold a stale alias of "the" game state; every
/// change flows through [`GameState::process_action`] or the hand
/// lifecycle methods, which preserve the invariants:
///
/// - `pot` equals the sum of chips committed and not yet awarded back;
/// - `current_bet` is the highest live bet of the round;
/// - chips never go negative (all debits clamp to the stack).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seat order, fixed for the hand.
    pub players: Vec<Player>,
    /// 0 to 5 board cards, always face up.
    pub community_cards: Vec<Card>,
    pub pot: u32,
    /// The table's highest live bet this round.
    pub current_bet: u32,
    pub phase: GamePhase,
    pub active_player_index: usize,
    pub dealer_index: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    deck: Deck,
}

/// One contender's evaluated hand at showdown, exposed so the
/// presentation layer can display the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowdownHand {
    pub seat: usize,
    pub ranking: HandRanking,
}

impl GameState {
    /// A table with no hand in progress yet (`Waiting`). The first hand
    /// is started with [`GameState::start_hand`].
    pub fn new_table(players: Vec<Player>, small_blind: u32, big_blind: u32) -> Self {
        Self {
            players,
            community_cards: Vec::new(),
            pot: 0,
            current_bet: 0,
            phase: GamePhase::Waiting,
            active_player_index: 0,
            dealer_index: 0,
            small_blind,
            big_blind,
            deck: Deck::new(),
        }
    }

    /// Starts a hand with the dealer button on `dealer_index` and a
    /// fresh OS-seeded deck. Chip stacks carry over from `self`.
    pub fn start_hand(self, dealer_index: usize) -> Result<GameState, GameError> {
        Self::create_hand_state(
            self.players,
            dealer_index,
            self.small_blind,
            self.big_blind,
            Deck::new(),
        )
    }

    /// Derives the next hand after a showdown. The dealer button rotates
    /// *forward* (increasing seat index, wrapping) every hand; stacks
    /// carry over and busted seats sit out as folded.
    pub fn next_hand(self) -> Result<GameState, GameError> {
        let dealer = (self.dealer_index + 1) % self.players.len();
        self.start_hand(dealer)
    }

    /// Builds the state for a fresh hand: seats reset, blinds posted,
    /// two hole cards dealt round-robin to every dealt-in player, action
    /// on the first active seat after the big blind.
    ///
    /// The small blind is the first funded seat after the dealer and the
    /// big blind the first funded seat after that (busted seats are
    /// skipped). Blind posts clamp to the stack, so a short stack can be
    /// all-in from the blinds. The deck is taken as an argument so
    /// callers can pin the shuffle (seeded or stacked) for reproducible
    /// hands.
    pub fn create_hand_state(
        mut players: Vec<Player>,
        dealer_index: usize,
        small_blind: u32,
        big_blind: u32,
        mut deck: Deck,
    ) -> Result<GameState, GameError> {
        let seats = players.len();
        if dealer_index >= seats {
            return Err(GameError::InvalidSeat {
                index: dealer_index,
                seats,
            });
        }
        for p in &mut players {
            p.reset_for_hand();
        }
        let funded = players.iter().filter(|p| p.can_act()).count();
        if funded < 2 {
            return Err(GameError::NotEnoughPlayers(funded));
        }

        players[dealer_index].is_dealer = true;
        let sb = next_seat(&players, dealer_index, |p| p.can_act()).ok_or(GameError::NoActivePlayer)?;
        let bb = next_seat(&players, sb, |p| p.can_act()).ok_or(GameError::NoActivePlayer)?;
        players[sb].is_small_blind = true;
        players[bb].is_big_blind = true;

        let mut pot = 0;
        pot += players[sb].commit(small_blind);
        pot += players[bb].commit(big_blind);
        debug!(
            "blinds posted: seat {} sb {}, seat {} bb {}",
            sb, players[sb].current_bet, bb, players[bb].current_bet
        );

        // One card per player per pass, starting after the dealer, so
        // the deal preserves turn order.
        for _ in 0..2 {
            let mut seat = dealer_index;
            for _ in 0..seats {
                seat = (seat + 1) % seats;
                if players[seat].is_contender() {
                    let card = deck.deal_card()?;
                    players[seat].hole_cards.push(card);
                }
            }
        }

        let state = GameState {
            community_cards: Vec::new(),
            pot,
            current_bet: big_blind,
            phase: GamePhase::Preflop,
            active_player_index: 0,
            dealer_index,
            small_blind,
            big_blind,
            deck,
            players,
        };

        // Under-the-gun: first seat after the big blind that can still
        // act. If the blinds put everyone all-in there is no betting at
        // all and the hand resolves immediately.
        match next_seat(&state.players, bb, |p| p.can_act()) {
            Some(utg) => Ok(GameState {
                active_player_index: utg,
                ..state
            }),
            None => state.determine_winner(),
        }
    }

    /// Applies the active player's action and advances the hand: next
    /// seat, next phase, or showdown. Monetary actions clamp to the
    /// player's stack (an over-commitment becomes an all-in); legality
    /// of the *intent* (e.g. checking while owing chips) is the
    /// boundary's job, see [`crate::rules::validate_action`].
    pub fn process_action(mut self, action: PlayerAction) -> Result<GameState, GameError> {
        if matches!(self.phase, GamePhase::Waiting | GamePhase::Showdown) {
            return Err(GameError::HandOver);
        }
        let idx = self.active_player_index;
        let table_bet = self.current_bet;
        let player = self.players.get_mut(idx).ok_or(GameError::NoActivePlayer)?;
        if !player.can_act() {
            return Err(GameError::NoActivePlayer);
        }

        match action {
            PlayerAction::Fold => {
                player.status = PlayerStatus::Folded;
            }
            PlayerAction::Check => {
                // No state change.
            }
            PlayerAction::Call => {
                let owed = table_bet.saturating_sub(player.current_bet);
                self.pot += player.commit(owed);
            }
            PlayerAction::Raise(amount) => {
                self.pot += player.commit(amount);
                // A clamped short raise cannot lower the table bet.
                self.current_bet = self.current_bet.max(player.current_bet);
            }
            PlayerAction::AllIn => {
                let stack = player.chips;
                self.pot += player.commit(stack);
                self.current_bet = self.current_bet.max(player.current_bet);
            }
        }
        debug!(
            "seat {} {:?}; pot {} table bet {}",
            idx, action, self.pot, self.current_bet
        );

        self.advance_turn()
    }

    /// Number of cards left in this hand's deck.
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// The player whose turn it is, if the hand is still in a betting
    /// round.
    pub fn active_player(&self) -> Option<&Player> {
        match self.phase {
            GamePhase::Waiting | GamePhase::Showdown => None,
            _ => self.players.get(self.active_player_index),
        }
    }

    // Turn advancement after an action:
    // 1. at most one player who can still act -> betting is over, even
    //    if all-in players have not matched (single shared pot);
    // 2. otherwise the next seat that can act, wrapping;
    // 3. the round ends only when every active player's bet matches the
    //    table bet AND the action has come back around to the round's
    //    opener. The second half matters: right after a raise, bets can
    //    be momentarily equal while players behind still owe a response.
    fn advance_turn(mut self) -> Result<GameState, GameError> {
        let acting = self.players.iter().filter(|p| p.can_act()).count();
        if acting <= 1 {
            return self.determine_winner();
        }

        let next = next_seat(&self.players, self.active_player_index, |p| p.can_act())
            .ok_or(GameError::NoActivePlayer)?;

        let all_bets_equal = self
            .players
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.current_bet == self.current_bet);

        let opener = self.round_opener().ok_or(GameError::NoActivePlayer)?;
        if all_bets_equal && next == opener {
            self.advance_phase()
        } else {
            self.active_player_index = next;
            Ok(self)
        }
    }

    // The seat that opens (or re-opens) the current betting round:
    // preflop it is the first active seat after the big blind, post-flop
    // the first active seat after the dealer.
    fn round_opener(&self) -> Option<usize> {
        let anchor = if self.phase == GamePhase::Preflop {
            self.players.iter().position(|p| p.is_big_blind)?
        } else {
            self.dealer_index
        };
        next_seat(&self.players, anchor, |p| p.can_act())
    }

    // Ends the betting round: per-player and table bets reset to zero,
    // the next street is dealt (one burn before each of flop, turn, and
    // river), and action opens on the first active seat after the
    // dealer. The river instead goes to showdown.
    fn advance_phase(mut self) -> Result<GameState, GameError> {
        for p in &mut self.players {
            p.current_bet = 0;
        }
        self.current_bet = 0;

        match self.phase {
            GamePhase::Preflop => {
                self.deal_community(3)?;
                self.phase = GamePhase::Flop;
            }
            GamePhase::Flop => {
                self.deal_community(1)?;
                self.phase = GamePhase::Turn;
            }
            GamePhase::Turn => {
                self.deal_community(1)?;
                self.phase = GamePhase::River;
            }
            GamePhase::River => return self.determine_winner(),
            GamePhase::Waiting | GamePhase::Showdown => return Err(GameError::HandOver),
        }
        debug!("phase {:?}, board {:?}", self.phase, self.community_cards);

        self.active_player_index =
            next_seat(&self.players, self.dealer_index, |p| p.can_act())
                .ok_or(GameError::NoActivePlayer)?;
        Ok(self)
    }

    fn deal_community(&mut self, n: usize) -> Result<(), GameError> {
        self.deck.burn_card()?;
        for _ in 0..n {
            let card = self.deck.deal_card()?;
            self.community_cards.push(card.revealed());
        }
        Ok(())
    }

    // Showdown. A lone contender takes the pot without a reveal. With
    // two or more contenders, any missing board cards are first run out
    // (all-in before the river) so every hand is evaluated on a full
    // board, then hole cards are revealed and the pot goes to the best
    // hand. Exact ties split the pot evenly; odd remainder chips go one
    // each to the tied seats closest after the dealer.
    fn determine_winner(mut self) -> Result<GameState, GameError> {
        self.phase = GamePhase::Showdown;

        let contenders: Vec<usize> = (0..self.players.len())
            .filter(|&i| self.players[i].is_contender())
            .collect();

        if contenders.len() == 1 {
            let seat = contenders[0];
            let won = self.pot;
            self.players[seat].chips += won;
            self.pot = 0;
            info!("seat {} wins {} uncontested", seat, won);
            return Ok(self);
        }

        if self.community_cards.is_empty() {
            self.deal_community(3)?;
        }
        while self.community_cards.len() < 5 {
            self.deal_community(1)?;
        }

        for p in &mut self.players {
            if p.status != PlayerStatus::Folded {
                for c in &mut p.hole_cards {
                    *c = c.revealed();
                }
            }
        }

        let mut ranked: Vec<ShowdownHand> = contenders
            .iter()
            .map(|&seat| {
                let mut cards = self.players[seat].hole_cards.clone();
                cards.extend_from_slice(&self.community_cards);
                ShowdownHand {
                    seat,
                    ranking: evaluate_hand(&cards),
                }
            })
            .collect();
        ranked.sort_by(|a, b| compare_hands(&b.ranking, &a.ranking));

        let best = ranked[0].ranking.clone();
        let mut winners: Vec<usize> = ranked
            .iter()
            .take_while(|sh| compare_hands(&sh.ranking, &best) == Ordering::Equal)
            .map(|sh| sh.seat)
            .collect();
        // Odd chips go to the tied seats closest after the dealer.
        let seats = self.players.len();
        let dealer = self.dealer_index;
        winners.sort_by_key(|&s| (s + seats - dealer - 1) % seats);

        let share = self.pot / winners.len() as u32;
        let remainder = (self.pot % winners.len() as u32) as usize;
        for (k, &seat) in winners.iter().enumerate() {
            let extra = u32::from(k < remainder);
            self.players[seat].chips += share + extra;
        }
        info!(
            "showdown: {} with {}, pot {} split {} way(s)",
            self.players[winners[0]].name,
            best.name(),
            self.pot,
            winners.len()
        );
        self.pot = 0;

        Ok(self)
    }
}

// First seat strictly after `from` (wrapping) matching the predicate.
fn next_seat<F>(players: &[Player], from: usize, pred: F) -> Option<usize>
where
    F: Fn(&Player) -> bool,
{
    let n = players.len();
    (1..=n).map(|k| (from + k) % n).find(|&i| pred(&players[i]))
}
