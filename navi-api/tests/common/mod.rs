#![allow(dead_code)]

use actix_web::{test, web, App};
use navi_api::config::ApiConfig;
use navi_api::models::NewQuestion;
use navi_api::routes::configure_routes;
use navi_api::Database;
use shared_types::FunctionName;
use std::sync::Arc;
use tempfile::TempDir;
use uuid::Uuid;

pub const CATALOG: &str = r#"{
    "plans": [
        {"name": "Basic", "price": 10.0},
        {"name": "Premium", "price": 50.0, "features": ["export"]}
    ],
    "functions": [
        {"name": {"az": "Insan resurslari", "en": "People", "ru": "Lyudi"}},
        {"name": {"az": "Strategiya", "en": "Strategy", "ru": "Strategiya"}}
    ],
    "questions": [
        {"function_id": 1, "question": {"az": "a1", "en": "Is hiring planned?", "ru": "r1"},
         "priority": 2, "type": ["Basic", "Premium"]},
        {"function_id": 1, "question": {"az": "a2", "en": "Are reviews held?", "ru": "r2"},
         "type": ["Basic", "Premium"]},
        {"function_id": 2, "question": {"az": "a3", "en": "Is there a strategy?", "ru": "r3"},
         "type": ["Premium"]}
    ]
}"#;

pub struct TestApp<S> {
    pub db: Arc<Database>,
    pub config: ApiConfig,
    pub app: S,
    // Keeps the catalog file alive for the duration of the test
    _catalog_dir: TempDir,
}

pub fn setup_test_db() -> anyhow::Result<Arc<Database>> {
    Ok(Arc::new(Database::open_in_memory()?))
}

pub fn test_config(catalog_dir: &TempDir) -> anyhow::Result<ApiConfig> {
    let catalog_path = catalog_dir.path().join("questions.json");
    std::fs::write(&catalog_path, CATALOG)?;

    let mut config = ApiConfig::default();
    config.database.path = ":memory:".into();
    config.catalog.path = catalog_path;
    Ok(config)
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let db = setup_test_db()?;
    let catalog_dir = tempfile::tempdir()?;
    let config = test_config(&catalog_dir)?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(config.clone()))
            .configure(configure_routes),
    )
    .await;

    Ok(TestApp {
        db,
        config,
        app,
        _catalog_dir: catalog_dir,
    })
}

/// Plan "Plan P" with function "People" holding two questions.
pub struct SeededPlan {
    pub plan_id: i64,
    pub function_id: i64,
    pub question_ids: Vec<i64>,
}

pub fn seed_single_function_plan(db: &Database) -> anyhow::Result<SeededPlan> {
    let plan = db.create_plan("Plan P", None, 25.0, &[])?;
    let function = db.create_function(&FunctionName {
        az: Some("Insan".to_string()),
        en: Some("People".to_string()),
        ru: Some("Lyudi".to_string()),
    })?;

    let mut question_ids = Vec::new();
    for (idx, text) in ["Is hiring planned?", "Are reviews held?"].iter().enumerate() {
        question_ids.push(db.create_question(&NewQuestion {
            function_id: function.id,
            az: format!("az {idx}"),
            en: text.to_string(),
            ru: format!("ru {idx}"),
            priority: 1,
            plan_ids: vec![plan.id],
        })?);
    }

    Ok(SeededPlan {
        plan_id: plan.id,
        function_id: function.id,
        question_ids,
    })
}

pub fn create_invoice(db: &Database, plan_id: i64) -> anyhow::Result<Uuid> {
    Ok(db.create_invoice(plan_id, 25.0, true, None)?.uid)
}
