use itertools::Itertools;

use crate::cards::Card;

/// Hand categories from weakest to strongest. Ordering follows the
/// score ladder in [`evaluate`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Category {
    /// Human-readable name, e.g. `"Full House"`.
    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// Matches `cards` against the category ladder, strongest first, and
/// returns the first category that fits. `None` below 2 cards.
///
/// The predicates run over the whole card set, not a chosen 5-card
/// subset: a flush needs any 5 same-suit cards anywhere in the set, a
/// straight needs 5 consecutive distinct values (or the A-2-3-4-5
/// wheel). A bare three of a kind also satisfies the pair test and so
/// classifies as a full house, which leaves `ThreeOfAKind` unmatched
/// in practice; the variant stays for the complete ladder.
pub fn classify(cards: &[Card]) -> Option<Category> {
    if cards.len() < 2 {
        return None;
    }
    let mut rank_counts = [0u8; 15];
    let mut suit_counts = [0u8; 4];
    for card in cards {
        rank_counts[card.value() as usize] += 1;
        suit_counts[card.suit.index()] += 1;
    }
    let straight = has_straight(&rank_counts);
    let flush = suit_counts.iter().any(|&n| n >= 5);

    let category = if straight && flush {
        // Top of the full set, so an off-suit ace alongside a king-high
        // straight flush still reads as royal.
        if top_value(&rank_counts) == 14 {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        }
    } else if has_count(&rank_counts, 4) {
        Category::FourOfAKind
    } else if has_count(&rank_counts, 3) && has_count(&rank_counts, 2) {
        Category::FullHouse
    } else if flush {
        Category::Flush
    } else if straight {
        Category::Straight
    } else if has_count(&rank_counts, 3) {
        Category::ThreeOfAKind
    } else if paired_values(&rank_counts) >= 2 {
        Category::TwoPair
    } else if has_count(&rank_counts, 2) {
        Category::Pair
    } else {
        Category::HighCard
    };
    Some(category)
}

/// Normalized strength of a card set in `[0.0, 1.0]`.
///
/// Fixed score per category; no kicker comparison inside a category
/// except the high-card band, which adds `top_value / 100` so that two
/// unpaired hands still order by top card. Fewer than 2 cards → 0.0.
pub fn evaluate(cards: &[Card]) -> f64 {
    let Some(category) = classify(cards) else {
        return 0.0;
    };
    match category {
        Category::RoyalFlush => 1.0,
        Category::StraightFlush => 0.95,
        Category::FourOfAKind => 0.90,
        Category::FullHouse => 0.85,
        Category::Flush => 0.80,
        Category::Straight => 0.75,
        Category::ThreeOfAKind => 0.70,
        Category::TwoPair => 0.65,
        Category::Pair => 0.60,
        Category::HighCard => {
            let top = cards.iter().map(Card::value).max().unwrap_or(0);
            0.30 + f64::from(top) / 100.0
        }
    }
}

/// Best achievable strength for hole cards plus community cards:
/// evaluates every 5-card subset of the combined set (21 subsets at the
/// full 7 cards) and returns the maximum. Before the flop, when fewer
/// than 5 cards are out, scores the hole cards alone.
pub fn evaluate_best_hand(hole: &[Card], community: &[Card]) -> f64 {
    let combined: Vec<Card> = hole.iter().chain(community.iter()).copied().collect();
    if combined.len() < 5 {
        return evaluate(hole);
    }
    combined
        .into_iter()
        .combinations(5)
        .map(|subset| evaluate(&subset))
        .fold(0.0, f64::max)
}

fn has_count(rank_counts: &[u8; 15], count: u8) -> bool {
    rank_counts.iter().any(|&n| n >= count)
}

/// Number of distinct values occurring at least twice.
fn paired_values(rank_counts: &[u8; 15]) -> usize {
    rank_counts.iter().filter(|&&n| n >= 2).count()
}

fn has_straight(rank_counts: &[u8; 15]) -> bool {
    let mut run = 0;
    for value in 2..=14 {
        if rank_counts[value] > 0 {
            run += 1;
            if run >= 5 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    // Ace plays low in the wheel
    rank_counts[14] > 0
        && rank_counts[2] > 0
        && rank_counts[3] > 0
        && rank_counts[4] > 0
        && rank_counts[5] > 0
}

fn top_value(rank_counts: &[u8; 15]) -> u8 {
    (2..=14usize)
        .rev()
        .find(|&value| rank_counts[value] > 0)
        .unwrap_or(0) as u8
}
