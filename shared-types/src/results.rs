//! Results document returned for a completed assessment.
//!
//! Distribution maps are keyed by the response value as a string (`"1"` to
//! `"5"`) and always carry all five keys. Percentages and scores are rounded
//! to two decimals.

use crate::catalog::FunctionName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SentimentCounts {
    pub negative: i64,
    pub neutral: i64,
    pub positive: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SentimentPercentages {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SentimentBreakdown {
    pub counts: SentimentCounts,
    pub percentages: SentimentPercentages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FunctionResult {
    pub function_name: FunctionName,
    pub total_questions: i64,
    pub total_score: f64,
    pub distribution: BTreeMap<String, f64>,
    pub sentiment: SentimentBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverallResult {
    pub total_questions: i64,
    pub total_answers: i64,
    pub total_score: f64,
    pub distribution: BTreeMap<String, f64>,
    pub sentiment: SentimentBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResults {
    pub functions: Vec<FunctionResult>,
    pub overall: OverallResult,
}
