use chrono::NaiveDate;
use shared_types::{FunctionName, FunctionResponse, PlanResponse};
use uuid::Uuid;

/// Response values accepted for an answer, lowest first
pub const ANSWER_SCALE: [i64; 5] = [1, 2, 3, 4, 5];

const ANSWER_LABELS: [(i64, &str); 5] = [
    (1, "Not Applicable"),
    (2, "Not Implemented"),
    (3, "Partially Implemented"),
    (4, "Implemented and Functioning"),
    (5, "Systematic and Innovative Implementation"),
];

pub fn is_valid_response(response: i64) -> bool {
    ANSWER_SCALE.contains(&response)
}

/// Display label of a response value, `None` outside the scale
pub fn response_label(response: i64) -> Option<&'static str> {
    ANSWER_LABELS
        .iter()
        .find(|(value, _)| *value == response)
        .map(|(_, label)| *label)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub features: Vec<String>,
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        PlanResponse {
            id: plan.id,
            name: plan.name,
            description: plan.description,
            price: plan.price,
            features: plan.features,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: i64,
    pub uid: Uuid,
    pub plan_id: i64,
    pub amount: f64,
    pub issued_date: NaiveDate,
    pub is_paid: bool,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub id: i64,
    pub az: Option<String>,
    pub en: Option<String>,
    pub ru: Option<String>,
}

impl Function {
    pub fn name(&self) -> FunctionName {
        FunctionName {
            az: self.az.clone(),
            en: self.en.clone(),
            ru: self.ru.clone(),
        }
    }
}

impl From<Function> for FunctionResponse {
    fn from(function: Function) -> Self {
        FunctionResponse {
            id: function.id,
            az: function.az,
            en: function.en,
            ru: function.ru,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub function_id: i64,
    pub az: String,
    pub en: String,
    pub ru: String,
    pub priority: i64,
    pub plan_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub id: i64,
    pub invoice_id: i64,
    pub is_completed: bool,
}

/// A submitted answer joined with its question and function, for export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerDetail {
    pub question_en: String,
    pub function_en: Option<String>,
    pub response: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_labels() {
        assert_eq!(response_label(1), Some("Not Applicable"));
        assert_eq!(response_label(4), Some("Implemented and Functioning"));
        assert_eq!(response_label(0), None);
        assert_eq!(response_label(6), None);
    }

    #[test]
    fn test_valid_responses() {
        assert!(ANSWER_SCALE.iter().all(|v| is_valid_response(*v)));
        assert!(!is_valid_response(0));
        assert!(!is_valid_response(-3));
    }
}
