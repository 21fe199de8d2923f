use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The ten hand categories, ordered weakest to strongest. Discriminants
/// 1..=10 are the classification ranks used for comparison.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 1,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandCategory {
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

/// The best five-card hand found for a player, used transiently during
/// showdown comparison. `cards` holds the chosen five cards sorted
/// descending by rank, which doubles as the kicker sequence for
/// tiebreaks.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRanking {
    pub category: HandCategory,
    pub cards: Vec<Card>,
}

impl HandRanking {
    /// Sentinel for inputs with fewer than five cards. Ranks below every
    /// real hand; never a valid showdown hand.
    pub fn incomplete() -> Self {
        Self {
            category: HandCategory::HighCard,
            cards: Vec::new(),
        }
    }

    /// Classification rank 1..=10, or 0 for the incomplete sentinel.
    pub fn rank(&self) -> u8 {
        if self.cards.is_empty() {
            0
        } else {
            self.category as u8
        }
    }

    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

/// Evaluates the best five-card hand from 5 to 7 cards by scoring every
/// five-card subset (C(7,5) = 21 in the worst case) and keeping the
/// strongest. The enumeration is exhaustive on purpose: different
/// subsets of seven cards can reach different categories, and pruning
/// would miss kicker differences.
///
/// Fewer than five cards returns [`HandRanking::incomplete`].
pub fn evaluate_hand(cards: &[Card]) -> HandRanking {
    let mut best = HandRanking::incomplete();
    for combo in five_card_subsets(cards) {
        let scored = evaluate_five_cards(&combo);
        if compare_hands(&scored, &best) == Ordering::Greater {
            best = scored;
        }
    }
    best
}

/// Classifies exactly five cards into one of the ten categories, in
/// strict priority order from Royal Flush down to High Card. The wheel
/// (A-2-3-4-5) counts as a straight with the Ace low and is never a
/// Royal Flush.
pub fn evaluate_five_cards(cards: &[Card; 5]) -> HandRanking {
    let mut sorted = *cards;
    sorted.sort_unstable_by(|a, b| b.rank.value().cmp(&a.rank.value()));
    let values = sorted.map(|c| c.rank.value());

    let is_flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let is_wheel = values == [14, 5, 4, 3, 2];
    let is_straight = is_wheel || values.windows(2).all(|w| w[0] == w[1] + 1);

    // Multiplicities of the rank histogram, largest first: 4-1, 3-2,
    // 3-1-1, 2-2-1, 2-1-1-1, or 1-1-1-1-1.
    let mut counts = [0u8; 15];
    for v in values {
        counts[v as usize] += 1;
    }
    let mut mult: Vec<u8> = counts.iter().copied().filter(|&c| c > 0).collect();
    mult.sort_unstable_by(|a, b| b.cmp(a));

    let category = if is_flush && is_straight && values[0] == 14 && !is_wheel {
        HandCategory::RoyalFlush
    } else if is_flush && is_straight {
        HandCategory::StraightFlush
    } else if mult[0] == 4 {
        HandCategory::FourOfAKind
    } else if mult[0] == 3 && mult[1] == 2 {
        HandCategory::FullHouse
    } else if is_flush {
        HandCategory::Flush
    } else if is_straight {
        HandCategory::Straight
    } else if mult[0] == 3 {
        HandCategory::ThreeOfAKind
    } else if mult[0] == 2 && mult[1] == 2 {
        HandCategory::TwoPair
    } else if mult[0] == 2 {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    };

    HandRanking {
        category,
        cards: sorted.to_vec(),
    }
}

/// Total-order comparison between two evaluated hands: `Greater` means
/// the first hand beats the second. Category rank first, then the
/// sorted five-card sequences position-by-position by rank value.
/// `Equal` means an exact tie and the pot is split.
pub fn compare_hands(a: &HandRanking, b: &HandRanking) -> Ordering {
    match a.rank().cmp(&b.rank()) {
        Ordering::Equal => {
            for (x, y) in a.cards.iter().zip(&b.cards) {
                match x.rank.value().cmp(&y.rank.value()) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            Ordering::Equal
        }
        ord => ord,
    }
}

// n is at most 7, so plain nested index loops beat a general-purpose
// combination generator.
fn five_card_subsets(cards: &[Card]) -> Vec<[Card; 5]> {
    let n = cards.len();
    let mut out = Vec::new();
    if n < 5 {
        return out;
    }
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        out.push([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
    out
}
