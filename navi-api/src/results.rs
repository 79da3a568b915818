//! Scoring and sentiment aggregation for a completed assessment.
//!
//! The aggregation works on an [`AssessmentSnapshot`] loaded by the storage
//! layer and never touches the database itself. Output is fully determined by
//! the snapshot: functions are emitted in ascending id order and every map has
//! a fixed key set.

use crate::models::{Function, ANSWER_SCALE};
use shared_types::{
    AssessmentResults, FunctionResult, OverallResult, SentimentBreakdown, SentimentCounts,
    SentimentPercentages,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Points awarded per response value
const SCORE_MAP: [(i64, u32); 5] = [(1, 0), (2, 25), (3, 50), (4, 75), (5, 100)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

const SENTIMENT_MAP: [(i64, Sentiment); 5] = [
    (1, Sentiment::Negative),
    (2, Sentiment::Negative),
    (3, Sentiment::Neutral),
    (4, Sentiment::Positive),
    (5, Sentiment::Positive),
];

/// Score points for a response; values outside the scale are worth 0.
pub fn score_points(response: i64) -> u32 {
    SCORE_MAP
        .iter()
        .find(|(value, _)| *value == response)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Sentiment bucket for a response; values outside the scale have none.
pub fn sentiment_of(response: i64) -> Option<Sentiment> {
    SENTIMENT_MAP
        .iter()
        .find(|(value, _)| *value == response)
        .map(|(_, sentiment)| *sentiment)
}

/// A function with at least one question under the invoice's plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlanFunction {
    pub function: Function,
    pub question_count: i64,
}

/// One answer of the invoice joined with the function of its question
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAnswer {
    pub response: i64,
    pub function: Option<Function>,
    /// Questions of `function` under the invoice's plan
    pub plan_question_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentSnapshot {
    pub plan_functions: Vec<PlanFunction>,
    pub answers: Vec<ScoredAnswer>,
}

#[derive(Debug, Default)]
struct Tally {
    counts: BTreeMap<i64, i64>,
    total_answers: i64,
}

impl Tally {
    fn record(&mut self, response: i64) {
        *self.counts.entry(response).or_insert(0) += 1;
        self.total_answers += 1;
    }

    fn count(&self, response: i64) -> i64 {
        self.counts.get(&response).copied().unwrap_or(0)
    }

    fn percentage(&self, count: i64) -> f64 {
        if self.total_answers == 0 {
            return 0.0;
        }
        round2(count as f64 / self.total_answers as f64 * 100.0)
    }

    fn score(&self) -> f64 {
        if self.total_answers == 0 {
            return 0.0;
        }
        let points: i64 = self
            .counts
            .iter()
            .map(|(response, count)| i64::from(score_points(*response)) * count)
            .sum();
        round2(points as f64 / self.total_answers as f64)
    }

    fn distribution(&self) -> BTreeMap<String, f64> {
        ANSWER_SCALE
            .iter()
            .map(|value| (value.to_string(), self.percentage(self.count(*value))))
            .collect()
    }

    fn sentiment(&self) -> SentimentBreakdown {
        let mut counts = SentimentCounts::default();
        for (response, count) in &self.counts {
            match sentiment_of(*response) {
                Some(Sentiment::Negative) => counts.negative += count,
                Some(Sentiment::Neutral) => counts.neutral += count,
                Some(Sentiment::Positive) => counts.positive += count,
                None => {}
            }
        }

        SentimentBreakdown {
            percentages: SentimentPercentages {
                negative: self.percentage(counts.negative),
                neutral: self.percentage(counts.neutral),
                positive: self.percentage(counts.positive),
            },
            counts,
        }
    }
}

struct FunctionBucket {
    function: Function,
    question_count: i64,
    tally: Tally,
}

impl FunctionBucket {
    fn new(function: Function, question_count: i64) -> Self {
        Self {
            function,
            question_count,
            tally: Tally::default(),
        }
    }

    fn into_result(self) -> FunctionResult {
        FunctionResult {
            function_name: self.function.name(),
            total_questions: self.question_count,
            total_score: self.tally.score(),
            distribution: self.tally.distribution(),
            sentiment: self.tally.sentiment(),
        }
    }
}

/// Builds the per-function and overall results for one assessment.
///
/// Functions of the plan are reported even when nothing was answered for
/// them. An answer whose function is not part of the plan gets a bucket of
/// its own; an answer without a function is skipped.
pub fn build_assessment_results(snapshot: &AssessmentSnapshot) -> AssessmentResults {
    let mut buckets: BTreeMap<i64, FunctionBucket> = snapshot
        .plan_functions
        .iter()
        .map(|entry| {
            (
                entry.function.id,
                FunctionBucket::new(entry.function.clone(), entry.question_count),
            )
        })
        .collect();

    let mut overall = Tally::default();

    for answer in &snapshot.answers {
        let Some(function) = &answer.function else {
            debug!(response = answer.response, "Skipping answer without function");
            continue;
        };

        let bucket = buckets.entry(function.id).or_insert_with(|| {
            debug!(function_id = function.id, "Tracking function outside the plan");
            FunctionBucket::new(function.clone(), answer.plan_question_count)
        });
        bucket.tally.record(answer.response);
        overall.record(answer.response);
    }

    let total_questions = buckets.values().map(|bucket| bucket.question_count).sum();

    AssessmentResults {
        functions: buckets
            .into_values()
            .map(FunctionBucket::into_result)
            .collect(),
        overall: OverallResult {
            total_questions,
            total_answers: overall.total_answers,
            total_score: overall.score(),
            distribution: overall.distribution(),
            sentiment: overall.sentiment(),
        },
    }
}

/// Two decimals, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
