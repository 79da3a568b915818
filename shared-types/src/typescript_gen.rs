/// Renders the named wire types as one TypeScript module, in the given order.
pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let definitions = type_names
        .iter()
        .map(|name| export_type(name).map(clean_type))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(definitions
        .into_iter()
        .filter(|definition| !definition.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;
    use ts_rs::TS;

    let result = match name {
        "FunctionName" => FunctionName::export_to_string()?,
        "FunctionResponse" => FunctionResponse::export_to_string()?,
        "QuestionResponse" => QuestionResponse::export_to_string()?,
        "PlanResponse" => PlanResponse::export_to_string()?,
        "CreatePlanRequest" => CreatePlanRequest::export_to_string()?,
        "PlanListResponse" => PlanListResponse::export_to_string()?,

        "CreateInvoiceRequest" => CreateInvoiceRequest::export_to_string()?,
        "InvoiceCreatedResponse" => InvoiceCreatedResponse::export_to_string()?,

        "AnswerEntry" => AnswerEntry::export_to_string()?,
        "SubmitAnswersResponse" => SubmitAnswersResponse::export_to_string()?,

        "SentimentCounts" => SentimentCounts::export_to_string()?,
        "SentimentPercentages" => SentimentPercentages::export_to_string()?,
        "SentimentBreakdown" => SentimentBreakdown::export_to_string()?,
        "FunctionResult" => FunctionResult::export_to_string()?,
        "OverallResult" => OverallResult::export_to_string()?,
        "AssessmentResults" => AssessmentResults::export_to_string()?,

        "ErrorResponse" => ErrorResponse::export_to_string()?,
        "HealthResponse" => HealthResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in shared-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

/// Drops ts-rs import lines and the generated-file banner so that several
/// definitions can share one output file.
fn clean_type(type_def: String) -> String {
    type_def
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.starts_with("import type") && !trimmed.starts_with("// This file was generated")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
