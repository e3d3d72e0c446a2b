//! Section totals, upper bonus, and grand total over a scorecard.
//!
//! All pure, order-independent sums over an immutable [`Scorecard`]
//! snapshot; unplayed categories count 0.

use crate::card::Scorecard;
use crate::category::{Category, Section};

/// Upper-section bonus awarded at the threshold.
pub const UPPER_BONUS: i32 = 50;

/// Upper total needed for the bonus: three of each face, 3 × (1+2+...+6).
pub const UPPER_BONUS_THRESHOLD: i32 = 63;

fn section_total(card: &Scorecard, section: Section) -> i32 {
    Category::ALL
        .iter()
        .filter(|c| c.section() == section)
        .map(|&c| card.get(c).unwrap_or(0))
        .sum()
}

/// Sum of recorded Ones..Sixes scores.
pub fn upper_section_total(card: &Scorecard) -> i32 {
    section_total(card, Section::Upper)
}

/// 50 once the upper total reaches 63, else 0.
pub fn upper_section_bonus(card: &Scorecard) -> i32 {
    if upper_section_total(card) >= UPPER_BONUS_THRESHOLD {
        UPPER_BONUS
    } else {
        0
    }
}

/// Sum of recorded lower-section scores.
pub fn lower_section_total(card: &Scorecard) -> i32 {
    section_total(card, Section::Lower)
}

/// Upper total + upper bonus + lower total.
pub fn grand_total(card: &Scorecard) -> i32 {
    upper_section_total(card) + upper_section_bonus(card) + lower_section_total(card)
}
