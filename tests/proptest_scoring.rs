//! Property-based tests for the scoring engine.
//!
//! Ensures aggregation, classification and the recommendation rules hold
//! their invariants across arbitrary answer sets.

use packaging_audit::model::CATEGORY_COUNT;
use packaging_audit::scoring::{
    aggregate, recommend, AuditScorer, CategoryScores, MaturityLevel, MIN_RECOMMENDATIONS,
    RECOMMENDATION_THRESHOLD,
};
use packaging_audit::{AnswerLevel, CompletedAnswers};
use proptest::prelude::*;

fn level() -> impl Strategy<Value = AnswerLevel> {
    prop_oneof![
        Just(AnswerLevel::Basic),
        Just(AnswerLevel::Intermediate),
        Just(AnswerLevel::Advanced),
    ]
}

fn answers() -> impl Strategy<Value = CompletedAnswers> {
    (
        prop::array::uniform4(level()),
        prop::array::uniform8(level()),
        prop::array::uniform8(level()),
    )
        .prop_map(|(strategic, operational, capabilities)| CompletedAnswers {
            strategic,
            operational,
            capabilities,
        })
}

fn category_values() -> impl Strategy<Value = [f64; CATEGORY_COUNT]> {
    prop::array::uniform9(0.0f64..=10.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn categories_stay_within_answer_scale(answers in answers()) {
        let scores = aggregate(&answers);
        for &value in scores.as_array() {
            prop_assert!((2.0..=9.0).contains(&value), "category score {} out of range", value);
        }
        let overall = scores.overall();
        prop_assert!((2.0..=9.0).contains(&overall));
    }

    #[test]
    fn maturity_matches_thresholds(answers in answers()) {
        let result = AuditScorer::new().score(&answers);
        let expected = if result.overall_score > 7.5 {
            MaturityLevel::High
        } else if result.overall_score > 4.5 {
            MaturityLevel::Medium
        } else {
            MaturityLevel::Low
        };
        prop_assert_eq!(result.maturity, expected);
    }

    #[test]
    fn classification_is_monotonic(a in 0.0f64..=10.0, b in 0.0f64..=10.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(MaturityLevel::from_score(low) <= MaturityLevel::from_score(high));
    }

    #[test]
    fn recommendations_respect_minimum(values in category_values()) {
        let scores = CategoryScores::from_array(values);
        let recs = recommend(&scores);
        let fired = [1usize, 5, 3, 6]
            .iter()
            .filter(|&&i| values[i] < RECOMMENDATION_THRESHOLD)
            .count();

        if fired < MIN_RECOMMENDATIONS {
            prop_assert_eq!(recs.len(), fired + 1);
            prop_assert_eq!(recs.last().map(|r| r.title.as_str()), Some("AI Predictive Flow"));
        } else {
            prop_assert_eq!(recs.len(), fired);
            prop_assert!(recs.iter().all(|r| r.title != "AI Predictive Flow"));
        }
    }

    #[test]
    fn recommendations_are_deterministic(values in category_values()) {
        let scores = CategoryScores::from_array(values);
        prop_assert_eq!(recommend(&scores), recommend(&scores));
    }

    #[test]
    fn radar_pairs_every_category(answers in answers()) {
        let result = AuditScorer::new().score(&answers);
        let scores = aggregate(&answers);
        prop_assert_eq!(result.radar_data.len(), CATEGORY_COUNT);
        for (entry, &value) in result.radar_data.iter().zip(scores.as_array()) {
            prop_assert!((entry.score - value).abs() < f64::EPSILON);
        }
    }
}

#[test]
fn classification_boundaries_are_strict() {
    assert_eq!(MaturityLevel::from_score(7.5), MaturityLevel::Medium);
    assert_eq!(MaturityLevel::from_score(7.50001), MaturityLevel::High);
    assert_eq!(MaturityLevel::from_score(4.5), MaturityLevel::Low);
    assert_eq!(MaturityLevel::from_score(4.50001), MaturityLevel::Medium);
}
