use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod answers;
pub mod catalog;
pub mod invoice;
pub mod results;
pub mod typescript_gen;

pub use typescript_gen::generate_typescript_definitions;

pub use answers::{AnswerEntry, SubmitAnswersResponse};
pub use catalog::{
    CreatePlanRequest, FunctionName, FunctionResponse, PlanListResponse, PlanResponse,
    QuestionResponse,
};
pub use invoice::{CreateInvoiceRequest, InvoiceCreatedResponse};
pub use results::{
    AssessmentResults, FunctionResult, OverallResult, SentimentBreakdown, SentimentCounts,
    SentimentPercentages,
};

// Shared models for the navi API and its web client

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
