use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Request body for issuing an invoice against a plan
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateInvoiceRequest {
    /// Plan id
    pub plan: i64,
    pub amount: f64,
    #[ts(optional)]
    pub is_paid: Option<bool>,
    pub email: Option<String>,
}

impl CreateInvoiceRequest {
    /// Invoices are paid unless the request says otherwise
    pub fn is_paid(&self) -> bool {
        self.is_paid.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceCreatedResponse {
    pub uid: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_paid_defaults_to_true() {
        let req: CreateInvoiceRequest =
            serde_json::from_str(r#"{"plan": 1, "amount": 49.99}"#).unwrap();
        assert_eq!(req.is_paid, None);
        assert!(req.is_paid());
        assert_eq!(req.email, None);
    }

    #[test]
    fn test_explicit_unpaid_invoice() {
        let req: CreateInvoiceRequest = serde_json::from_str(
            r#"{"plan": 2, "amount": 10, "is_paid": false, "email": "hr@example.com"}"#,
        )
        .unwrap();
        assert!(!req.is_paid());
        assert_eq!(req.email.as_deref(), Some("hr@example.com"));
    }

    #[test]
    fn test_is_paid_is_optional_in_typescript() {
        let ts = CreateInvoiceRequest::decl();
        assert!(ts.contains("is_paid?: boolean"), "{ts}");
    }
}
