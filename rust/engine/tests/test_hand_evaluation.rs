use felt_engine::cards::Card;
use felt_engine::hand::{classify, evaluate, evaluate_best_hand, Category};

fn c(spec: &str) -> Card {
    spec.parse().expect("valid card literal")
}

fn cards(specs: &[&str]) -> Vec<Card> {
    specs.iter().map(|s| c(s)).collect()
}

/// Independent maximum over every 5-card subset, written as plain
/// nested index loops.
fn brute_force_best(all: &[Card]) -> f64 {
    let n = all.len();
    let mut best = 0.0_f64;
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                for l in (k + 1)..n {
                    for m in (l + 1)..n {
                        let subset = [all[i], all[j], all[k], all[l], all[m]];
                        best = best.max(evaluate(&subset));
                    }
                }
            }
        }
    }
    best
}

#[test]
fn fewer_than_two_cards_score_zero() {
    assert_eq!(evaluate(&[]), 0.0);
    assert_eq!(evaluate(&cards(&["As"])), 0.0);
    assert_eq!(classify(&[]), None);
    assert_eq!(classify(&cards(&["As"])), None);
}

#[test]
fn high_card_adds_top_value_over_the_base() {
    let nine_high = evaluate(&cards(&["2c", "9d"]));
    assert!((nine_high - 0.39).abs() < 1e-9);

    let ace_high = evaluate(&cards(&["2c", "Ad"]));
    assert!((ace_high - 0.44).abs() < 1e-9);

    assert!(ace_high > nine_high);
    assert!(ace_high < 0.60, "high card stays below the pair band");
}

#[test]
fn pair_scores_a_flat_060() {
    assert_eq!(evaluate(&cards(&["Ah", "Ad"])), 0.60);
    assert_eq!(evaluate(&cards(&["2h", "2d"])), 0.60);
    assert_eq!(evaluate(&cards(&["7h", "7d", "Kc", "2s", "9d"])), 0.60);
}

#[test]
fn two_pair_scores_065() {
    let hand = cards(&["Ah", "Ad", "Kh", "Kd", "2c"]);
    assert_eq!(evaluate(&hand), 0.65);
    assert_eq!(classify(&hand), Some(Category::TwoPair));
}

#[test]
fn bare_trips_score_as_a_full_house() {
    // The trips also satisfies the pair test, so the full-house row
    // matches first. The 0.70 band never fires.
    let trips = cards(&["Ah", "Ac", "Ad", "Kh", "Qs"]);
    assert_eq!(evaluate(&trips), 0.85);
    assert_eq!(classify(&trips), Some(Category::FullHouse));

    let real_boat = cards(&["Ah", "Ac", "Ad", "Kh", "Kd"]);
    assert_eq!(evaluate(&real_boat), 0.85);
    assert_eq!(classify(&real_boat), Some(Category::FullHouse));
}

#[test]
fn straight_scores_075() {
    assert_eq!(evaluate(&cards(&["5h", "6c", "7d", "8s", "9h"])), 0.75);
}

#[test]
fn duplicated_value_does_not_break_a_straight() {
    // 5-6-6-7-8-9 holds a straight among its distinct values.
    let with_dup = cards(&["5h", "6c", "6d", "7d", "8s", "9h"]);
    assert_eq!(evaluate(&with_dup), 0.75);
}

#[test]
fn wheel_counts_as_a_straight() {
    let wheel = cards(&["Ah", "2c", "3d", "4s", "5h"]);
    assert_eq!(evaluate(&wheel), 0.75);
    assert_eq!(classify(&wheel), Some(Category::Straight));
}

#[test]
fn flush_scores_080_anywhere_in_the_set() {
    assert_eq!(evaluate(&cards(&["2h", "7h", "9h", "Jh", "Kh"])), 0.80);
    // 7-card set, flush buried behind off-suit high cards
    let seven = cards(&["As", "Kd", "2h", "7h", "9h", "Jh", "Kh"]);
    assert_eq!(evaluate(&seven), 0.80);
}

#[test]
fn quads_score_090() {
    let quads = cards(&["Ah", "Ad", "Ac", "As", "2d"]);
    assert_eq!(evaluate(&quads), 0.90);
    assert_eq!(classify(&quads), Some(Category::FourOfAKind));
}

#[test]
fn straight_flush_scores_095() {
    let sf = cards(&["9s", "10s", "Js", "Qs", "Ks"]);
    assert_eq!(evaluate(&sf), 0.95);
    assert_eq!(classify(&sf), Some(Category::StraightFlush));
}

#[test]
fn royal_flush_scores_100() {
    let royal = cards(&["10h", "Jh", "Qh", "Kh", "Ah"]);
    assert_eq!(evaluate(&royal), 1.0);
    assert_eq!(classify(&royal), Some(Category::RoyalFlush));
}

#[test]
fn off_suit_ace_reads_a_king_high_straight_flush_as_royal() {
    // Straight and flush both hold over the full set, and the set's
    // top value is the off-suit ace, so the classifier takes the royal
    // branch even though the ace plays no part in the straight flush.
    let quirk = cards(&["9s", "10s", "Js", "Qs", "Ks", "Ad"]);
    assert_eq!(evaluate(&quirk), 1.0);
    assert_eq!(classify(&quirk), Some(Category::RoyalFlush));
}

#[test]
fn category_scores_are_strictly_ordered() {
    let ladder = [
        evaluate(&cards(&["10h", "Jh", "Qh", "Kh", "Ah"])), // royal
        evaluate(&cards(&["9s", "10s", "Js", "Qs", "Ks"])), // straight flush
        evaluate(&cards(&["Ah", "Ad", "Ac", "As", "2d"])),  // quads
        evaluate(&cards(&["Ah", "Ac", "Ad", "Kh", "Kd"])),  // full house
        evaluate(&cards(&["2h", "7h", "9h", "Jh", "Kh"])),  // flush
        evaluate(&cards(&["5h", "6c", "7d", "8s", "9h"])),  // straight
        evaluate(&cards(&["Ah", "Ad", "Kh", "Kd", "2c"])),  // two pair
        evaluate(&cards(&["Ah", "Ad", "7c", "9s", "2d"])),  // pair
        evaluate(&cards(&["2c", "Ad", "7h", "9s", "Jc"])),  // ace high
    ];
    for pair in ladder.windows(2) {
        assert!(pair[0] > pair[1], "{} should beat {}", pair[0], pair[1]);
    }
}

#[test]
fn category_labels_match_the_table_talk() {
    assert_eq!(Category::RoyalFlush.label(), "Royal Flush");
    assert_eq!(Category::ThreeOfAKind.label(), "Three of a Kind");
    assert_eq!(Category::HighCard.label(), "High Card");
    assert_eq!(
        classify(&cards(&["Ah", "Ad", "Kh", "Kd", "2c"])).map(Category::label),
        Some("Two Pair")
    );
}

#[test]
fn best_hand_matches_brute_force_for_every_category() {
    let fixtures: [(&[&str], f64); 10] = [
        (&["10h", "Jh", "Qh", "Kh", "Ah", "2c", "7d"], 1.0),
        (&["5s", "6s", "7s", "8s", "9s", "2d", "2c"], 0.95),
        (&["Ah", "Ad", "Ac", "As", "2d", "3c", "4h"], 0.90),
        (&["Kh", "Kd", "Kc", "Qh", "Qd", "2c", "3d"], 0.85),
        (&["Ah", "Ac", "Ad", "Kh", "Qs", "2d", "7c"], 0.85), // bare trips
        (&["2h", "5h", "9h", "Jh", "Kh", "As", "8d"], 0.80),
        (&["4c", "5d", "6h", "7s", "8c", "Kd", "Ah"], 0.75),
        (&["Ah", "Ad", "Kh", "Kd", "2c", "7s", "9d"], 0.65),
        (&["Ah", "Ad", "2c", "7s", "9d", "Jh", "3s"], 0.60),
        (&["2c", "4d", "7h", "9s", "Jc", "Kd", "Ah"], 0.44),
    ];
    for (specs, expected) in fixtures {
        let all = cards(specs);
        let best = evaluate_best_hand(&all[..2], &all[2..]);
        let oracle = brute_force_best(&all);
        assert!(
            (best - oracle).abs() < 1e-9,
            "{:?}: best {} vs oracle {}",
            specs,
            best,
            oracle
        );
        assert!(
            (best - expected).abs() < 1e-9,
            "{:?}: best {} vs expected {}",
            specs,
            best,
            expected
        );
    }
}

#[test]
fn best_hand_falls_back_to_hole_cards_below_five_total() {
    assert_eq!(evaluate_best_hand(&cards(&["Ah", "Ad"]), &[]), 0.60);

    // 4 cards total: the community pair of aces is ignored entirely,
    // only the hole cards score.
    let hole = cards(&["2h", "3d"]);
    let community = cards(&["Ah", "Ad"]);
    let strength = evaluate_best_hand(&hole, &community);
    assert!((strength - 0.33).abs() < 1e-9);
}

#[test]
fn best_hand_with_exactly_five_uses_the_single_subset() {
    let hole = cards(&["Ah", "Ad"]);
    let community = cards(&["Ac", "2d", "3c"]);
    assert_eq!(evaluate_best_hand(&hole, &community), 0.85);
}
