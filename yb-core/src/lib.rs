//! yb-core: category model, hand scoring, and scorecard totals.
//!
//! The scoring side is pure: a 5-dice hand plus a category yields a raw
//! score, with the upper bonus applied only on the totals side. Game state
//! (who rolls, which category gets marked, where cards live) belongs to the
//! caller; this crate only reads a [`Scorecard`] snapshot back for totals.

pub mod card;
pub mod category;
pub mod scoring;
pub mod totals;

pub use card::Scorecard;
pub use category::{Category, CategoryInfo, ParseCategoryError, Section, CATEGORY_INFO, NUM_CATS};
pub use scoring::{dice_groups, score_hand, scores_for_dice, DiceGroup};
pub use totals::{
    grand_total, lower_section_total, upper_section_bonus, upper_section_total, UPPER_BONUS,
    UPPER_BONUS_THRESHOLD,
};

#[cfg(test)]
mod category_tests;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
