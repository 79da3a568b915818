use super::{find_invoice, ASSESSMENT_NOT_FOUND, INVOICE_NOT_FOUND};
use crate::error::{AppError, AppResult};
use crate::export::{answer_rows, results_rows, to_csv};
use crate::models::Invoice;
use crate::results::build_assessment_results;
use crate::storage::Database;
use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use shared_types::AssessmentResults;
use std::sync::Arc;
use tracing::info;

fn assessed_invoice(db: &Database, invoice_uid: &str) -> AppResult<Invoice> {
    let invoice = find_invoice(db, invoice_uid, ASSESSMENT_NOT_FOUND)?;
    db.get_assessment(invoice.id)?
        .ok_or_else(|| AppError::NotFound(ASSESSMENT_NOT_FOUND.to_string()))?;
    Ok(invoice)
}

fn compute_results(db: &Database, invoice: &Invoice) -> AppResult<AssessmentResults> {
    let snapshot = db.load_assessment_snapshot(invoice)?;
    let results = build_assessment_results(&snapshot);
    info!(
        invoice_uid = %invoice.uid,
        functions = results.functions.len(),
        total_answers = results.overall.total_answers,
        "Computed assessment results"
    );
    Ok(results)
}

fn csv_attachment(body: Vec<u8>, filename: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(filename)],
            },
        ))
        .body(body)
}

/// GET /analysis/result/{invoice_uid}
pub async fn get_results(
    invoice_uid: web::Path<String>,
    db: web::Data<Arc<Database>>,
) -> Result<HttpResponse, AppError> {
    let invoice = assessed_invoice(&db, &invoice_uid)?;
    let results = compute_results(&db, &invoice)?;
    Ok(HttpResponse::Ok().json(results))
}

/// GET /analysis/export/{invoice_uid}
/// Results as one CSV row per function
pub async fn export_results(
    invoice_uid: web::Path<String>,
    db: web::Data<Arc<Database>>,
) -> Result<HttpResponse, AppError> {
    let invoice = assessed_invoice(&db, &invoice_uid)?;
    let results = compute_results(&db, &invoice)?;
    let body = to_csv(&results_rows(&results))?;

    Ok(csv_attachment(
        body,
        format!("diagnosis_results_{}.csv", invoice.uid),
    ))
}

/// GET /analysis/export-results/{invoice_uid}
/// Every submitted answer with its question, function and label
pub async fn export_answers(
    invoice_uid: web::Path<String>,
    db: web::Data<Arc<Database>>,
) -> Result<HttpResponse, AppError> {
    let invoice = find_invoice(&db, &invoice_uid, INVOICE_NOT_FOUND)?;
    let answers = db.answers_for_export(invoice.id)?;
    info!(invoice_uid = %invoice.uid, answer_count = answers.len(), "Exporting answers");

    let body = to_csv(&answer_rows(&answers))?;
    Ok(csv_attachment(body, format!("answers_{}.csv", invoice.uid)))
}
