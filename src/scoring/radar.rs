//! Radar chart dataset.

use super::aggregate::CategoryScores;
use serde::{Deserialize, Serialize};

/// One spoke of the maturity radar: actual score against the benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarEntry {
    pub name: String,
    pub score: f64,
    pub goal: f64,
}

impl RadarEntry {
    /// Distance to the benchmark; zero when the goal is met.
    #[must_use]
    pub fn gap(&self) -> f64 {
        (self.goal - self.score).max(0.0)
    }
}

/// Zip category scores with their benchmark goals, in chart order.
#[must_use]
pub fn radar_data(scores: &CategoryScores) -> Vec<RadarEntry> {
    scores
        .iter()
        .map(|(category, score)| RadarEntry {
            name: category.name().to_string(),
            score,
            goal: f64::from(category.goal()),
        })
        .collect()
}
