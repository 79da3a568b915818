use crate::error::AppResult;
use crate::models::Invoice;
use chrono::{NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn invoice_from_row(row: &Row<'_>) -> rusqlite::Result<Invoice> {
    let uid: String = row.get(1)?;
    let uid = Uuid::parse_str(&uid).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let issued_date: String = row.get(4)?;
    let issued_date = NaiveDate::parse_from_str(&issued_date, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Invoice {
        id: row.get(0)?,
        uid,
        plan_id: row.get(2)?,
        amount: row.get(3)?,
        issued_date,
        is_paid: row.get(5)?,
        email: row.get(6)?,
    })
}

/// Invoice database methods
impl super::Database {
    /// Issues an invoice for a plan with a fresh uid, dated today.
    pub fn create_invoice(
        &self,
        plan_id: i64,
        amount: f64,
        is_paid: bool,
        email: Option<&str>,
    ) -> AppResult<Invoice> {
        let conn = self.lock()?;
        let uid = Uuid::new_v4();
        let issued_date = Utc::now().date_naive();

        conn.execute(
            "INSERT INTO invoices (uid, plan_id, amount, issued_date, is_paid, email)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                uid.to_string(),
                plan_id,
                amount,
                issued_date.format(DATE_FORMAT).to_string(),
                is_paid,
                email
            ],
        )?;

        Ok(Invoice {
            id: conn.last_insert_rowid(),
            uid,
            plan_id,
            amount,
            issued_date,
            is_paid,
            email: email.map(str::to_string),
        })
    }

    pub fn get_invoice_by_uid(&self, uid: &Uuid) -> AppResult<Option<Invoice>> {
        let conn = self.lock()?;
        let invoice = conn
            .query_row(
                "SELECT id, uid, plan_id, amount, issued_date, is_paid, email
                 FROM invoices WHERE uid = ?1",
                params![uid.to_string()],
                invoice_from_row,
            )
            .optional()?;
        Ok(invoice)
    }
}
