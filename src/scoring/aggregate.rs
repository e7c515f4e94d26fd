//! Category aggregation and overall score.

use crate::model::{Category, CategorySource, CompletedAnswers, CATEGORY_COUNT};
use serde::{Deserialize, Serialize};

/// Unrounded score per category, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores([f64; CATEGORY_COUNT]);

impl CategoryScores {
    /// Wrap raw values given in [`Category::ALL`] order.
    #[must_use]
    pub const fn from_array(values: [f64; CATEGORY_COUNT]) -> Self {
        Self(values)
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        self.0[category.index()]
    }

    #[must_use]
    pub const fn as_array(&self) -> &[f64; CATEGORY_COUNT] {
        &self.0
    }

    /// `(category, score)` pairs in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Arithmetic mean of the nine category scores.
    #[must_use]
    pub fn overall(&self) -> f64 {
        self.0.iter().sum::<f64>() / CATEGORY_COUNT as f64
    }
}

/// Average the raw answers into the nine category scores.
#[must_use]
pub fn aggregate(answers: &CompletedAnswers) -> CategoryScores {
    let mut scores = [0.0; CATEGORY_COUNT];
    for (slot, category) in scores.iter_mut().zip(Category::ALL) {
        *slot = category_score(answers, category.source());
    }
    CategoryScores(scores)
}

fn category_score(answers: &CompletedAnswers, source: CategorySource) -> f64 {
    let inputs = source.inputs();
    let total: u32 = inputs
        .iter()
        .map(|&(section, index)| u32::from(answers.section(section)[index].score()))
        .sum();
    f64::from(total) / inputs.len() as f64
}
