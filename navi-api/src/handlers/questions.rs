use super::{find_invoice, INVOICE_NOT_FOUND};
use crate::error::AppError;
use crate::storage::Database;
use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::info;

/// GET /analysis/questions/{invoice_uid}
/// Questionnaire of the invoice's plan
pub async fn get_questions(
    invoice_uid: web::Path<String>,
    db: web::Data<Arc<Database>>,
) -> Result<HttpResponse, AppError> {
    let invoice = find_invoice(&db, &invoice_uid, INVOICE_NOT_FOUND)?;
    let questions = db.questions_for_invoice(invoice.plan_id, invoice.id)?;
    info!(
        invoice_uid = %invoice.uid,
        question_count = questions.len(),
        "Serving questionnaire"
    );

    Ok(HttpResponse::Ok().json(questions))
}
