//! Flat tabular views of results and answers, written as CSV.

use crate::error::{AppError, AppResult};
use crate::models::{response_label, AnswerDetail};
use serde::Serialize;
use shared_types::AssessmentResults;

/// One row per function of the results document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    #[serde(rename = "Function Name")]
    pub function_name: String,
    #[serde(rename = "Total Questions")]
    pub total_questions: i64,
    #[serde(rename = "Not Applicable")]
    pub not_applicable: f64,
    #[serde(rename = "Not Implemented")]
    pub not_implemented: f64,
    #[serde(rename = "Partially Implemented")]
    pub partially_implemented: f64,
    #[serde(rename = "Implemented and Functioning")]
    pub implemented: f64,
    #[serde(rename = "Systematic and Innovative Implementation")]
    pub systematic: f64,
    #[serde(rename = "Result")]
    pub result: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRow {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Function")]
    pub function: String,
    #[serde(rename = "Answer")]
    pub answer: String,
}

pub fn results_rows(results: &AssessmentResults) -> Vec<ResultRow> {
    results
        .functions
        .iter()
        .map(|function| {
            let bucket = |key: &str| function.distribution.get(key).copied().unwrap_or(0.0);
            ResultRow {
                function_name: function.function_name.en.clone().unwrap_or_default(),
                total_questions: function.total_questions,
                not_applicable: bucket("1"),
                not_implemented: bucket("2"),
                partially_implemented: bucket("3"),
                implemented: bucket("4"),
                systematic: bucket("5"),
                result: function.total_score,
            }
        })
        .collect()
}

pub fn answer_rows(answers: &[AnswerDetail]) -> Vec<AnswerRow> {
    answers
        .iter()
        .map(|answer| AnswerRow {
            question: answer.question_en.clone(),
            function: answer.function_en.clone().unwrap_or_default(),
            answer: response_label(answer.response)
                .map(str::to_string)
                .unwrap_or_else(|| answer.response.to_string()),
        })
        .collect()
}

/// Serialises rows to CSV with a header line taken from the field names.
pub fn to_csv<T: Serialize>(rows: &[T]) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to flush CSV output: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{FunctionName, FunctionResult, OverallResult, SentimentBreakdown};
    use std::collections::BTreeMap;

    fn result(en: Option<&str>, distribution: [f64; 5], score: f64) -> FunctionResult {
        FunctionResult {
            function_name: FunctionName {
                az: None,
                en: en.map(str::to_string),
                ru: None,
            },
            total_questions: 2,
            total_score: score,
            distribution: (1..=5)
                .zip(distribution)
                .map(|(key, pct)| (key.to_string(), pct))
                .collect(),
            sentiment: SentimentBreakdown::default(),
        }
    }

    fn results(functions: Vec<FunctionResult>) -> AssessmentResults {
        AssessmentResults {
            functions,
            overall: OverallResult {
                total_questions: 0,
                total_answers: 0,
                total_score: 0.0,
                distribution: BTreeMap::new(),
                sentiment: SentimentBreakdown::default(),
            },
        }
    }

    #[test]
    fn test_results_rows() {
        let rows = results_rows(&results(vec![
            result(Some("People"), [0.0, 0.0, 0.0, 50.0, 50.0], 87.5),
            result(None, [0.0; 5], 0.0),
        ]));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].function_name, "People");
        assert_eq!(rows[0].implemented, 50.0);
        assert_eq!(rows[0].systematic, 50.0);
        assert_eq!(rows[0].result, 87.5);
        assert_eq!(rows[1].function_name, "");
    }

    #[test]
    fn test_results_csv_header() {
        let rows = results_rows(&results(vec![result(
            Some("People"),
            [0.0, 0.0, 0.0, 50.0, 50.0],
            87.5,
        )]));
        let csv = String::from_utf8(to_csv(&rows).unwrap()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some(
                "Function Name,Total Questions,Not Applicable,Not Implemented,\
                 Partially Implemented,Implemented and Functioning,\
                 Systematic and Innovative Implementation,Result"
            )
        );
        assert_eq!(lines.next(), Some("People,2,0.0,0.0,0.0,50.0,50.0,87.5"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_answer_rows_use_labels() {
        let rows = answer_rows(&[
            AnswerDetail {
                question_en: "Are goals set?".to_string(),
                function_en: Some("Goals".to_string()),
                response: 3,
            },
            AnswerDetail {
                question_en: "Orphan".to_string(),
                function_en: None,
                response: 5,
            },
        ]);

        assert_eq!(rows[0].answer, "Partially Implemented");
        assert_eq!(rows[0].function, "Goals");
        assert_eq!(rows[1].function, "");
        assert_eq!(rows[1].answer, "Systematic and Innovative Implementation");
    }

    #[test]
    fn test_empty_csv() {
        let rows: Vec<AnswerRow> = Vec::new();
        assert!(to_csv(&rows).unwrap().is_empty());
    }
}
