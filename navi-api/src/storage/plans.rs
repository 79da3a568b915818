use crate::error::AppResult;
use crate::models::Plan;
use rusqlite::{params, OptionalExtension, Row};

const PLAN_COLUMNS: &str = "id, name, description, price, features";

fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<Plan> {
    let features: String = row.get(4)?;
    let features = serde_json::from_str(&features).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Plan {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        features,
    })
}

/// Plan database methods
impl super::Database {
    pub fn create_plan(
        &self,
        name: &str,
        description: Option<&str>,
        price: f64,
        features: &[String],
    ) -> AppResult<Plan> {
        let conn = self.lock()?;
        let features_json = serde_json::to_string(features)?;

        conn.execute(
            "INSERT INTO plans (name, description, price, features) VALUES (?1, ?2, ?3, ?4)",
            params![name, description, price, features_json],
        )?;

        Ok(Plan {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            description: description.map(str::to_string),
            price,
            features: features.to_vec(),
        })
    }

    pub fn list_plans(&self) -> AppResult<Vec<Plan>> {
        let conn = self.lock()?;
        let plans = conn
            .prepare(&format!("SELECT {PLAN_COLUMNS} FROM plans ORDER BY id"))?
            .query_map([], plan_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(plans)
    }

    pub fn get_plan(&self, plan_id: i64) -> AppResult<Option<Plan>> {
        let conn = self.lock()?;
        let plan = conn
            .query_row(
                &format!("SELECT {PLAN_COLUMNS} FROM plans WHERE id = ?1"),
                params![plan_id],
                plan_from_row,
            )
            .optional()?;
        Ok(plan)
    }

    pub fn get_plan_by_name(&self, name: &str) -> AppResult<Option<Plan>> {
        let conn = self.lock()?;
        let plan = conn
            .query_row(
                &format!("SELECT {PLAN_COLUMNS} FROM plans WHERE name = ?1"),
                params![name],
                plan_from_row,
            )
            .optional()?;
        Ok(plan)
    }
}
