//! Maturity categories and their mapping onto survey answers.

use super::answer::Section;
use serde::{Deserialize, Serialize};

/// Number of scored categories.
pub const CATEGORY_COUNT: usize = 9;

/// The nine categories plotted on the maturity radar, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Strategy,
    DataCapture,
    Visibility,
    Security,
    Serialization,
    Engagement,
    Compliance,
    Sustainability,
    Agility,
}

impl Category {
    /// All categories in chart order; `ALL[i].index() == i`.
    pub const ALL: [Self; CATEGORY_COUNT] = [
        Self::Strategy,
        Self::DataCapture,
        Self::Visibility,
        Self::Security,
        Self::Serialization,
        Self::Engagement,
        Self::Compliance,
        Self::Sustainability,
        Self::Agility,
    ];

    /// Position in the chart order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strategy => "Strategy",
            Self::DataCapture => "Data Capture",
            Self::Visibility => "Visibility",
            Self::Security => "Security",
            Self::Serialization => "Serialization",
            Self::Engagement => "Engagement",
            Self::Compliance => "Compliance",
            Self::Sustainability => "Sustainability",
            Self::Agility => "Agility",
        }
    }

    /// Industry benchmark score for this category.
    #[must_use]
    pub const fn goal(self) -> u8 {
        CATEGORY_GOALS[self.index()]
    }

    /// The answers that feed this category.
    #[must_use]
    pub const fn source(self) -> CategorySource {
        CATEGORY_SOURCES[self.index()]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Benchmark goal per category, aligned with [`Category::ALL`].
pub const CATEGORY_GOALS: [u8; CATEGORY_COUNT] = [10, 9, 8, 10, 10, 8, 9, 8, 9];

/// Which raw answers are averaged into a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySource {
    /// Mean of the listed strategic answers.
    Strategic(&'static [usize]),
    /// Mean of `operational[index]` and `capabilities[index]`.
    Paired { index: usize },
}

impl CategorySource {
    /// `(section, index)` pairs contributing to the category.
    #[must_use]
    pub fn inputs(self) -> Vec<(Section, usize)> {
        match self {
            Self::Strategic(indices) => indices
                .iter()
                .map(|&i| (Section::Strategic, i))
                .collect(),
            Self::Paired { index } => vec![
                (Section::Operational, index),
                (Section::Capabilities, index),
            ],
        }
    }
}

/// Category → source answers, aligned with [`Category::ALL`].
pub const CATEGORY_SOURCES: [CategorySource; CATEGORY_COUNT] = [
    CategorySource::Strategic(&[0, 1, 2, 3]),
    CategorySource::Paired { index: 0 },
    CategorySource::Paired { index: 1 },
    CategorySource::Paired { index: 2 },
    CategorySource::Paired { index: 3 },
    CategorySource::Paired { index: 4 },
    CategorySource::Paired { index: 5 },
    CategorySource::Paired { index: 6 },
    CategorySource::Paired { index: 7 },
];
