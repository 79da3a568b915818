/// Create invoices and their one-to-one assessments
pub fn migration() -> String {
    r#"
CREATE TABLE invoices (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    uid TEXT NOT NULL UNIQUE,
    plan_id INTEGER NOT NULL,
    amount REAL NOT NULL,
    issued_date TEXT NOT NULL,
    is_paid INTEGER NOT NULL DEFAULT 1,
    email TEXT,
    FOREIGN KEY (plan_id) REFERENCES plans (id) ON DELETE CASCADE
);

CREATE TABLE assessments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    invoice_id INTEGER NOT NULL UNIQUE,
    is_completed INTEGER NOT NULL DEFAULT 0,
    FOREIGN KEY (invoice_id) REFERENCES invoices (id) ON DELETE CASCADE
);
"#
    .to_string()
}
