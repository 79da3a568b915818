use crate::error::{AppError, AppResult};
use crate::models::{AnswerDetail, Assessment, Function, Invoice};
use crate::results::{AssessmentSnapshot, PlanFunction, ScoredAnswer};
use rusqlite::{params, OptionalExtension};
use tracing::debug;

/// Answer and assessment database methods
impl super::Database {
    /// Stores a batch of `(question_id, response)` answers for an invoice and
    /// marks its assessment completed, all in one transaction.
    ///
    /// Fails without writing anything when a question does not exist.
    pub fn record_submission(&self, invoice_id: i64, answers: &[(i64, i64)]) -> AppResult<()> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        {
            let mut question_exists = tx.prepare("SELECT 1 FROM questions WHERE id = ?1")?;
            let mut insert = tx.prepare(
                "INSERT INTO answers (invoice_id, question_id, response) VALUES (?1, ?2, ?3)",
            )?;

            for (question_id, response) in answers {
                if !question_exists.exists(params![question_id])? {
                    return Err(AppError::InvalidRequest(format!(
                        "Question {} does not exist",
                        question_id
                    )));
                }
                insert.execute(params![invoice_id, question_id, response])?;
            }
        }

        tx.execute(
            "INSERT INTO assessments (invoice_id, is_completed) VALUES (?1, 1)
                ON CONFLICT(invoice_id) DO UPDATE SET is_completed = 1",
            params![invoice_id],
        )?;

        tx.commit()?;
        debug!(invoice_id, answer_count = answers.len(), "Recorded submission");
        Ok(())
    }

    pub fn get_assessment(&self, invoice_id: i64) -> AppResult<Option<Assessment>> {
        let conn = self.lock()?;
        let assessment = conn
            .query_row(
                "SELECT id, invoice_id, is_completed FROM assessments WHERE invoice_id = ?1",
                params![invoice_id],
                |row| {
                    Ok(Assessment {
                        id: row.get(0)?,
                        invoice_id: row.get(1)?,
                        is_completed: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(assessment)
    }

    /// Reads everything the results aggregation needs for one invoice.
    pub fn load_assessment_snapshot(&self, invoice: &Invoice) -> AppResult<AssessmentSnapshot> {
        let conn = self.lock()?;

        let plan_functions = conn
            .prepare(
                "SELECT f.id, f.az, f.en, f.ru, COUNT(DISTINCT q.id)
                 FROM functions f
                 JOIN questions q ON q.function_id = f.id
                 JOIN question_plans qp ON qp.question_id = q.id
                 WHERE qp.plan_id = ?1
                 GROUP BY f.id, f.az, f.en, f.ru
                 ORDER BY f.id",
            )?
            .query_map(params![invoice.plan_id], |row| {
                Ok(PlanFunction {
                    function: Function {
                        id: row.get(0)?,
                        az: row.get(1)?,
                        en: row.get(2)?,
                        ru: row.get(3)?,
                    },
                    question_count: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let answers = conn
            .prepare(
                "SELECT a.response, f.id, f.az, f.en, f.ru,
                        (SELECT COUNT(DISTINCT q2.id)
                         FROM questions q2
                         JOIN question_plans qp2 ON qp2.question_id = q2.id
                         WHERE q2.function_id = f.id AND qp2.plan_id = ?2)
                 FROM answers a
                 JOIN questions q ON q.id = a.question_id
                 LEFT JOIN functions f ON f.id = q.function_id
                 WHERE a.invoice_id = ?1
                 ORDER BY a.id",
            )?
            .query_map(params![invoice.id, invoice.plan_id], |row| {
                let function_id: Option<i64> = row.get(1)?;
                let function = match function_id {
                    Some(id) => Some(Function {
                        id,
                        az: row.get(2)?,
                        en: row.get(3)?,
                        ru: row.get(4)?,
                    }),
                    None => None,
                };

                Ok(ScoredAnswer {
                    response: row.get(0)?,
                    function,
                    plan_question_count: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AssessmentSnapshot {
            plan_functions,
            answers,
        })
    }

    /// Submitted answers of an invoice, ordered by function id descending then
    /// question id.
    pub fn answers_for_export(&self, invoice_id: i64) -> AppResult<Vec<AnswerDetail>> {
        let conn = self.lock()?;
        let answers = conn
            .prepare(
                "SELECT q.en, f.en, a.response
                 FROM answers a
                 JOIN questions q ON q.id = a.question_id
                 LEFT JOIN functions f ON f.id = q.function_id
                 WHERE a.invoice_id = ?1
                 ORDER BY q.function_id DESC, q.id ASC, a.id ASC",
            )?
            .query_map(params![invoice_id], |row| {
                Ok(AnswerDetail {
                    question_en: row.get(0)?,
                    function_en: row.get(1)?,
                    response: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(answers)
    }
}
