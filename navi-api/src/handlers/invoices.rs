use crate::error::AppError;
use crate::storage::Database;
use actix_web::{web, HttpResponse};
use shared_types::{CreateInvoiceRequest, InvoiceCreatedResponse};
use std::sync::Arc;
use tracing::info;

/// POST /analysis/invoice/
/// Issues an invoice for a plan and returns its uid
pub async fn create_invoice(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let req = request.into_inner();

    if !req.amount.is_finite() || req.amount < 0.0 {
        return Err(AppError::InvalidRequest(
            "Amount must be a non-negative number".to_string(),
        ));
    }

    let email = req
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty());
    if let Some(email) = email {
        if !email.contains('@') {
            return Err(AppError::InvalidRequest(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
    }

    let plan = db
        .get_plan(req.plan)?
        .ok_or_else(|| AppError::InvalidRequest(format!("Plan {} does not exist", req.plan)))?;

    let invoice = db.create_invoice(plan.id, req.amount, req.is_paid(), email)?;
    info!(invoice_uid = %invoice.uid, plan = %plan.name, "Created invoice");

    Ok(HttpResponse::Created().json(InvoiceCreatedResponse { uid: invoice.uid }))
}
