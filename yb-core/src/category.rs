//! Scoring categories and their static metadata.
//!
//! The category set is closed: 13 variants, each belonging to exactly one
//! section. Wire names (`ones`, ..., `threeOfAKind`) match the keys the
//! game-state collaborator stores in its per-player scoring record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of scoring categories.
pub const NUM_CATS: usize = 13;

/// Scorecard section a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Upper,
    Lower,
}

/// One of the 13 ways a hand can be scored.
///
/// Index order is stable: it drives [`Category::ALL`], the metadata table,
/// and the output order of [`crate::scoring::scores_for_dice`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Category {
    Ones = 0,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yatzy,
    Chance,
}

impl Category {
    /// Every category in index order (upper section first).
    pub const ALL: [Category; NUM_CATS] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yatzy,
        Category::Chance,
    ];

    /// Stable index in 0..[`NUM_CATS`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section this category counts toward.
    pub fn section(self) -> Section {
        match self {
            Category::Ones
            | Category::Twos
            | Category::Threes
            | Category::Fours
            | Category::Fives
            | Category::Sixes => Section::Upper,
            Category::ThreeOfAKind
            | Category::FourOfAKind
            | Category::FullHouse
            | Category::SmallStraight
            | Category::LargeStraight
            | Category::Yatzy
            | Category::Chance => Section::Lower,
        }
    }

    /// Face value counted by an upper-section category; `None` for lower.
    pub fn face_value(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// Metadata row for this category.
    pub fn info(self) -> &'static CategoryInfo {
        &CATEGORY_INFO[self as usize]
    }

    /// Wire identifier (`ones`, `threeOfAKind`, ...).
    pub fn id(self) -> &'static str {
        self.info().id
    }

    /// Human display name (`Three of a Kind`, ...).
    pub fn display_name(self) -> &'static str {
        self.info().name
    }

    /// One-line scoring description for UI rendering.
    pub fn description(self) -> &'static str {
        self.info().description
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.id() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Static reference row for one category.
///
/// Read-only after startup; the UI collaborator renders its scorecard from
/// this table. Not used in scoring arithmetic except the section mapping.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    /// Wire identifier, matching the collaborator's scoring-record keys.
    pub id: &'static str,
    pub name: &'static str,
    pub section: Section,
    pub description: &'static str,
}

/// Metadata table in [`Category::ALL`] order.
pub const CATEGORY_INFO: [CategoryInfo; NUM_CATS] = [
    CategoryInfo {
        category: Category::Ones,
        id: "ones",
        name: "Ones",
        section: Section::Upper,
        description: "The sum of all dice showing the number 1.",
    },
    CategoryInfo {
        category: Category::Twos,
        id: "twos",
        name: "Twos",
        section: Section::Upper,
        description: "The sum of all dice showing the number 2.",
    },
    CategoryInfo {
        category: Category::Threes,
        id: "threes",
        name: "Threes",
        section: Section::Upper,
        description: "The sum of all dice showing the number 3.",
    },
    CategoryInfo {
        category: Category::Fours,
        id: "fours",
        name: "Fours",
        section: Section::Upper,
        description: "The sum of all dice showing the number 4.",
    },
    CategoryInfo {
        category: Category::Fives,
        id: "fives",
        name: "Fives",
        section: Section::Upper,
        description: "The sum of all dice showing the number 5.",
    },
    CategoryInfo {
        category: Category::Sixes,
        id: "sixes",
        name: "Sixes",
        section: Section::Upper,
        description: "The sum of all dice showing the number 6.",
    },
    CategoryInfo {
        category: Category::ThreeOfAKind,
        id: "threeOfAKind",
        name: "Three of a Kind",
        section: Section::Lower,
        description: "Three dice showing the same number. Score: sum of all the dice.",
    },
    CategoryInfo {
        category: Category::FourOfAKind,
        id: "fourOfAKind",
        name: "Four of a Kind",
        section: Section::Lower,
        description: "Four dice with the same number. Score: sum of all the dice.",
    },
    CategoryInfo {
        category: Category::FullHouse,
        id: "fullHouse",
        name: "Full House",
        section: Section::Lower,
        description: "Any set of three combined with a different pair. Score: 25 points.",
    },
    CategoryInfo {
        category: Category::SmallStraight,
        id: "smallStraight",
        name: "Small Straight",
        section: Section::Lower,
        description: "Sequence of 4 dice. Score: 30 points.",
    },
    CategoryInfo {
        category: Category::LargeStraight,
        id: "largeStraight",
        name: "Large Straight",
        section: Section::Lower,
        description: "Sequence of 5 dice. Score: 40 points.",
    },
    CategoryInfo {
        category: Category::Yatzy,
        id: "yatzy",
        name: "Yatzy",
        section: Section::Lower,
        description: "All five dice with the same number. Score: 50 points.",
    },
    CategoryInfo {
        category: Category::Chance,
        id: "chance",
        name: "Chance",
        section: Section::Lower,
        description: "Any combination of dice. Score: sum of all the dice.",
    },
];
