pub mod answers;
pub mod catalog;
pub mod health;
pub mod invoices;
pub mod plans;
pub mod questions;
pub mod results;

use crate::error::{AppError, AppResult};
use crate::models::Invoice;
use crate::storage::Database;
use uuid::Uuid;

pub const INVOICE_NOT_FOUND: &str = "Invoice not found.";
pub const ASSESSMENT_NOT_FOUND: &str = "Invoice or Assessment not found.";

/// Looks up an invoice by the uid taken from the request path.
///
/// A malformed uid is reported the same way as an unknown one.
pub(crate) fn find_invoice(db: &Database, uid: &str, not_found: &str) -> AppResult<Invoice> {
    let uid = Uuid::parse_str(uid.trim()).map_err(|_| AppError::NotFound(not_found.to_string()))?;
    db.get_invoice_by_uid(&uid)?
        .ok_or_else(|| AppError::NotFound(not_found.to_string()))
}
