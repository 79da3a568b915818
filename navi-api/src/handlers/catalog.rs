use crate::catalog::{seed_functions, seed_plans, seed_questions, Catalog};
use crate::config::ApiConfig;
use crate::error::AppError;
use crate::storage::Database;
use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::info;

/// POST /analysis/create-functions/
/// Seeds catalog plans and functions
pub async fn create_functions(
    db: web::Data<Arc<Database>>,
    config: web::Data<ApiConfig>,
) -> Result<HttpResponse, AppError> {
    let catalog = Catalog::load(&config.catalog.path)?;
    info!(path = %config.catalog.path.display(), "Seeding functions from catalog");

    let plans = seed_plans(&db, &catalog)?;
    let functions = seed_functions(&db, &catalog)?;
    info!(plans, functions, "Catalog functions seeded");

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Functions created successfully."))
}

/// POST /analysis/create-questions/
pub async fn create_questions(
    db: web::Data<Arc<Database>>,
    config: web::Data<ApiConfig>,
) -> Result<HttpResponse, AppError> {
    let catalog = Catalog::load(&config.catalog.path)?;
    info!(path = %config.catalog.path.display(), "Seeding questions from catalog");

    let questions = seed_questions(&db, &catalog)?;
    info!(questions, "Catalog questions seeded");

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Questions created successfully."))
}
