//! Hand scoring for the 13-category ruleset.
//!
//! Dice are grouped with a fixed face-count array (faces 1..=6), never a
//! dynamic map. Groups order by descending count with ties broken toward the
//! lower face, so group order is deterministic even when it cannot affect a
//! score.

use crate::category::{Category, NUM_CATS};

/// Dice of one face value within a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceGroup {
    /// Face value in 1..=6.
    pub face: u8,
    /// How many dice show `face` (1..=5).
    pub count: u8,
}

/// Count dice per face: `counts[f - 1]` = number of dice showing face `f`.
fn face_counts(dice: [u8; 5]) -> [u8; 6] {
    debug_assert!(
        dice.iter().all(|d| (1..=6).contains(d)),
        "die out of range: {:?}",
        dice
    );
    let mut counts = [0u8; 6];
    for &d in &dice {
        counts[(d - 1) as usize] += 1;
    }
    counts
}

/// Partition a hand into face groups, largest group first.
///
/// Equal-sized groups order by ascending face. Only faces actually present
/// appear, so the group count runs from 1 (five of a kind) to 5 (all
/// distinct).
pub fn dice_groups(dice: [u8; 5]) -> Vec<DiceGroup> {
    let counts = face_counts(dice);
    let mut groups: Vec<DiceGroup> = (1u8..=6)
        .filter(|&f| counts[(f - 1) as usize] > 0)
        .map(|f| DiceGroup {
            face: f,
            count: counts[(f - 1) as usize],
        })
        .collect();
    groups.sort_by(|a, b| b.count.cmp(&a.count).then(a.face.cmp(&b.face)));
    groups
}

/// Size of the largest face group.
fn largest_group(counts: &[u8; 6]) -> u8 {
    counts.iter().copied().max().unwrap_or(0)
}

/// True if every face in `run` shows on at least one die.
fn covers(counts: &[u8; 6], run: &[u8]) -> bool {
    run.iter().all(|&f| counts[(f - 1) as usize] > 0)
}

/// Sum of the dice showing `face`.
fn face_total(counts: &[u8; 6], face: u8) -> i32 {
    counts[(face - 1) as usize] as i32 * face as i32
}

/// Score a 5-dice hand for one category.
///
/// - `dice` must hold exactly five values in 1..=6; order does not matter.
///   An out-of-range die value is a caller bug and panics (fail fast).
/// - The result is the **raw** category score; the upper bonus is applied on
///   the totals side, never here.
pub fn score_hand(category: Category, dice: [u8; 5]) -> i32 {
    let counts = face_counts(dice);
    let sum_all: i32 = dice.iter().map(|&d| d as i32).sum();

    match category {
        Category::Ones => face_total(&counts, 1),
        Category::Twos => face_total(&counts, 2),
        Category::Threes => face_total(&counts, 3),
        Category::Fours => face_total(&counts, 4),
        Category::Fives => face_total(&counts, 5),
        Category::Sixes => face_total(&counts, 6),
        Category::ThreeOfAKind => {
            if largest_group(&counts) >= 3 {
                sum_all
            } else {
                0
            }
        }
        Category::FourOfAKind => {
            if largest_group(&counts) >= 4 {
                sum_all
            } else {
                0
            }
        }
        Category::FullHouse => {
            // Exactly a triple plus a distinct pair. Five of a kind is a
            // single group and does not qualify.
            let groups = dice_groups(dice);
            if groups.len() == 2 && groups[0].count == 3 && groups[1].count == 2 {
                25
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if covers(&counts, &[1, 2, 3, 4])
                || covers(&counts, &[2, 3, 4, 5])
                || covers(&counts, &[3, 4, 5, 6])
            {
                30
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if covers(&counts, &[1, 2, 3, 4, 5]) || covers(&counts, &[2, 3, 4, 5, 6]) {
                40
            } else {
                0
            }
        }
        Category::Yatzy => {
            if largest_group(&counts) == 5 {
                50
            } else {
                0
            }
        }
        Category::Chance => sum_all,
    }
}

/// Compute raw scores for every category at once.
///
/// Output is indexed in [`Category::ALL`] order. Input contract matches
/// [`score_hand`].
pub fn scores_for_dice(dice: [u8; 5]) -> [i32; NUM_CATS] {
    let mut out = [0i32; NUM_CATS];
    for cat in Category::ALL {
        out[cat.index()] = score_hand(cat, dice);
    }
    out
}
