//! Audit scoring engine.
//!
//! Turns a fully answered survey into category scores, an overall score,
//! a maturity tier, the radar dataset and a list of recommendations.
//! Every function here is pure.
//!
//! # Usage
//!
//! ```
//! use packaging_audit::model::{AnswerLevel, CompletedAnswers};
//! use packaging_audit::scoring::{AuditScorer, MaturityLevel};
//!
//! let answers = CompletedAnswers::uniform(AnswerLevel::Advanced);
//! let result = AuditScorer::new().score(&answers);
//!
//! assert_eq!(result.maturity, MaturityLevel::High);
//! for rec in &result.recommendations {
//!     println!("- {} ({})", rec.title, rec.impact);
//! }
//! ```

mod aggregate;
mod maturity;
mod radar;
mod recommend;
mod scorer;

pub use aggregate::{aggregate, CategoryScores};
pub use maturity::{MaturityLevel, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
pub use radar::{radar_data, RadarEntry};
pub use recommend::{
    recommend, Impact, Recommendation, RecommendationTag, MIN_RECOMMENDATIONS,
    RECOMMENDATION_THRESHOLD,
};
pub use scorer::{AuditResult, AuditScorer, SCORING_ENGINE_VERSION};
