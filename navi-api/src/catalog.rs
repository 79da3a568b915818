//! Questionnaire catalog loaded from a JSON file and written to the database.
//!
//! ```json
//! {
//!   "plans": [{"name": "Basic", "price": 10.0}],
//!   "functions": [{"name": {"az": "...", "en": "People", "ru": "..."}}],
//!   "questions": [{"function_id": 1, "question": {"az": "...", "en": "...", "ru": "..."},
//!                  "priority": 2, "type": ["Basic"]}]
//! }
//! ```

use crate::error::{AppError, AppResult};
use crate::models::NewQuestion;
use crate::storage::Database;
use serde::Deserialize;
use shared_types::FunctionName;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub plans: Vec<CatalogPlan>,
    #[serde(default)]
    pub functions: Vec<CatalogFunction>,
    #[serde(default)]
    pub questions: Vec<CatalogQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPlan {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFunction {
    pub name: FunctionName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionText {
    pub az: String,
    pub en: String,
    pub ru: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogQuestion {
    pub function_id: i64,
    pub question: QuestionText,
    #[serde(default = "default_priority")]
    pub priority: i64,
    /// Names of the plans the question belongs to
    #[serde(rename = "type", default)]
    pub plans: Vec<String>,
}

fn default_priority() -> i64 {
    1
}

impl Catalog {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = serde_json::from_str(&content)?;
        Ok(catalog)
    }
}

/// Creates catalog plans that do not exist yet; returns how many were created.
pub fn seed_plans(db: &Database, catalog: &Catalog) -> AppResult<usize> {
    let mut created = 0;
    for plan in &catalog.plans {
        if db.get_plan_by_name(&plan.name)?.is_some() {
            continue;
        }
        db.create_plan(
            &plan.name,
            plan.description.as_deref(),
            plan.price,
            &plan.features,
        )?;
        created += 1;
    }
    info!(created, "Seeded plans");
    Ok(created)
}

/// Creates catalog functions, skipping any entry that shares a name in any
/// language with a stored function.
pub fn seed_functions(db: &Database, catalog: &Catalog) -> AppResult<usize> {
    let mut known: HashSet<String> = HashSet::new();
    for function in db.list_functions()? {
        known.extend([function.az, function.en, function.ru].into_iter().flatten());
    }

    let mut created = 0;
    for function in &catalog.functions {
        let names = [&function.name.az, &function.name.en, &function.name.ru];
        let taken = names
            .iter()
            .filter_map(|name| name.as_ref())
            .find(|name| known.contains(*name));
        if let Some(taken) = taken {
            debug!(name = %taken, "Function already exists, skipping");
            continue;
        }
        db.create_function(&function.name)?;
        known.extend(names.into_iter().flatten().cloned());
        created += 1;
    }
    info!(created, "Seeded functions");
    Ok(created)
}

/// Creates catalog questions linked to the plans named in their `type` list.
///
/// Plan names with no matching plan are ignored; an unknown function id
/// aborts seeding.
pub fn seed_questions(db: &Database, catalog: &Catalog) -> AppResult<usize> {
    let mut created = 0;
    for item in &catalog.questions {
        if db.get_function(item.function_id)?.is_none() {
            return Err(AppError::InvalidRequest(format!(
                "Catalog question references unknown function {}",
                item.function_id
            )));
        }

        let mut plan_ids = Vec::new();
        for plan_name in &item.plans {
            match db.get_plan_by_name(plan_name)? {
                Some(plan) => plan_ids.push(plan.id),
                None => warn!(plan = %plan_name, "Catalog question names unknown plan"),
            }
        }

        db.create_question(&NewQuestion {
            function_id: item.function_id,
            az: item.question.az.clone(),
            en: item.question.en.clone(),
            ru: item.question.ru.clone(),
            priority: item.priority,
            plan_ids,
        })?;
        created += 1;
    }
    info!(created, "Seeded questions");
    Ok(created)
}
