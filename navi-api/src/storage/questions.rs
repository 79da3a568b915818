use crate::error::AppResult;
use crate::models::{Function, NewQuestion};
use rusqlite::{params, OptionalExtension, Row};
use shared_types::{FunctionName, FunctionResponse, QuestionResponse};
use std::collections::HashMap;

fn function_from_row(row: &Row<'_>) -> rusqlite::Result<Function> {
    Ok(Function {
        id: row.get(0)?,
        az: row.get(1)?,
        en: row.get(2)?,
        ru: row.get(3)?,
    })
}

/// Function and question database methods
impl super::Database {
    pub fn create_function(&self, name: &FunctionName) -> AppResult<Function> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO functions (az, en, ru) VALUES (?1, ?2, ?3)",
            params![name.az, name.en, name.ru],
        )?;

        Ok(Function {
            id: conn.last_insert_rowid(),
            az: name.az.clone(),
            en: name.en.clone(),
            ru: name.ru.clone(),
        })
    }

    pub fn get_function(&self, function_id: i64) -> AppResult<Option<Function>> {
        let conn = self.lock()?;
        let function = conn
            .query_row(
                "SELECT id, az, en, ru FROM functions WHERE id = ?1",
                params![function_id],
                function_from_row,
            )
            .optional()?;
        Ok(function)
    }

    pub fn list_functions(&self) -> AppResult<Vec<Function>> {
        let conn = self.lock()?;
        let functions = conn
            .prepare("SELECT id, az, en, ru FROM functions ORDER BY id")?
            .query_map([], function_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(functions)
    }

    /// Inserts a question and links it to its plans in one transaction.
    pub fn create_question(&self, question: &NewQuestion) -> AppResult<i64> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO questions (function_id, az, en, ru, priority)
                VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                question.function_id,
                question.az,
                question.en,
                question.ru,
                question.priority
            ],
        )?;
        let question_id = tx.last_insert_rowid();

        for plan_id in &question.plan_ids {
            tx.execute(
                "INSERT OR IGNORE INTO question_plans (question_id, plan_id) VALUES (?1, ?2)",
                params![question_id, plan_id],
            )?;
        }

        tx.commit()?;
        Ok(question_id)
    }

    /// Questions of a plan as served to the respondent of `invoice_id`.
    ///
    /// Ordered by function id descending, then question id.
    pub fn questions_for_invoice(
        &self,
        plan_id: i64,
        invoice_id: i64,
    ) -> AppResult<Vec<QuestionResponse>> {
        let conn = self.lock()?;

        let mut plan_links: HashMap<i64, Vec<i64>> = HashMap::new();
        let links = conn
            .prepare(
                "SELECT qp.question_id, qp.plan_id
                 FROM question_plans qp
                 JOIN question_plans mine ON mine.question_id = qp.question_id
                 WHERE mine.plan_id = ?1
                 ORDER BY qp.question_id, qp.plan_id",
            )?
            .query_map(params![plan_id], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        for (question_id, linked_plan) in links {
            plan_links.entry(question_id).or_default().push(linked_plan);
        }

        let questions = conn
            .prepare(
                "SELECT q.id, q.az, q.en, q.ru, q.priority,
                        f.id, f.az, f.en, f.ru,
                        (SELECT a.response FROM answers a
                         WHERE a.question_id = q.id AND a.invoice_id = ?2
                         ORDER BY a.id LIMIT 1)
                 FROM questions q
                 JOIN question_plans qp ON qp.question_id = q.id
                 JOIN functions f ON f.id = q.function_id
                 WHERE qp.plan_id = ?1
                 ORDER BY f.id DESC, q.id ASC",
            )?
            .query_map(params![plan_id, invoice_id], |row| {
                let id: i64 = row.get(0)?;
                Ok(QuestionResponse {
                    id,
                    az: row.get(1)?,
                    en: row.get(2)?,
                    ru: row.get(3)?,
                    priority: row.get(4)?,
                    function: FunctionResponse {
                        id: row.get(5)?,
                        az: row.get(6)?,
                        en: row.get(7)?,
                        ru: row.get(8)?,
                    },
                    answer: row.get(9)?,
                    plan: plan_links.get(&id).cloned().unwrap_or_default(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(questions)
    }
}
