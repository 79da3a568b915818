use super::{find_invoice, INVOICE_NOT_FOUND};
use crate::error::AppError;
use crate::models::is_valid_response;
use crate::storage::Database;
use actix_web::{web, HttpResponse};
use shared_types::{AnswerEntry, SubmitAnswersResponse};
use std::sync::Arc;
use tracing::{info, warn};

/// POST /analysis/start/{invoice_uid}
/// Stores a batch of answers and marks the invoice's assessment completed
pub async fn submit_answers(
    invoice_uid: web::Path<String>,
    entries: web::Json<Vec<AnswerEntry>>,
    db: web::Data<Arc<Database>>,
) -> Result<HttpResponse, AppError> {
    let invoice = find_invoice(&db, &invoice_uid, INVOICE_NOT_FOUND)?;

    let answers = entries
        .iter()
        .map(|entry| {
            let (question_id, response) = entry.resolve().map_err(AppError::InvalidRequest)?;
            if !is_valid_response(response) {
                warn!(question_id, response, "Rejected response outside the scale");
                return Err(AppError::InvalidRequest(format!(
                    "Response {} for question {} is outside the 1-5 scale",
                    response, question_id
                )));
            }
            Ok((question_id, response))
        })
        .collect::<Result<Vec<_>, _>>()?;

    db.record_submission(invoice.id, &answers)?;
    info!(
        invoice_uid = %invoice.uid,
        answer_count = answers.len(),
        "Answers received"
    );

    Ok(HttpResponse::Ok().json(SubmitAnswersResponse {
        status: "Answers received.".to_string(),
    }))
}
