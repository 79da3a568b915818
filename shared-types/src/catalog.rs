use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Name of a function in the three supported languages.
///
/// Every language variant is optional; records created before a translation
/// existed carry `null` for that language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FunctionName {
    pub az: Option<String>,
    pub en: Option<String>,
    pub ru: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FunctionResponse {
    pub id: i64,
    pub az: Option<String>,
    pub en: Option<String>,
    pub ru: Option<String>,
}

/// A questionnaire item as served to the respondent of an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionResponse {
    pub id: i64,
    pub function: FunctionResponse,
    /// The response already submitted for this question on the invoice, if any
    pub answer: Option<i64>,
    pub az: String,
    pub en: String,
    pub ru: String,
    pub priority: i64,
    /// Ids of the plans this question belongs to
    pub plan: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatePlanRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanListResponse {
    pub plans: Vec<PlanResponse>,
}
