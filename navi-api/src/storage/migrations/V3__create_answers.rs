/// Create the answers table; responses are restricted to the 1-5 scale
pub fn migration() -> String {
    r#"
CREATE TABLE answers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    invoice_id INTEGER NOT NULL,
    question_id INTEGER NOT NULL,
    response INTEGER NOT NULL CHECK (response BETWEEN 1 AND 5),
    FOREIGN KEY (invoice_id) REFERENCES invoices (id) ON DELETE CASCADE,
    FOREIGN KEY (question_id) REFERENCES questions (id) ON DELETE CASCADE
);

CREATE INDEX idx_answers_invoice
    ON answers(invoice_id);
"#
    .to_string()
}
