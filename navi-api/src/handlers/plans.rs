use crate::error::AppError;
use crate::storage::Database;
use actix_web::{web, HttpResponse};
use shared_types::{CreatePlanRequest, PlanListResponse, PlanResponse};
use std::sync::Arc;
use tracing::info;

/// GET /analysis/plans
pub async fn list_plans(db: web::Data<Arc<Database>>) -> Result<HttpResponse, AppError> {
    let plans = db
        .list_plans()?
        .into_iter()
        .map(PlanResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(PlanListResponse { plans }))
}

/// POST /analysis/plans
pub async fn create_plan(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreatePlanRequest>,
) -> Result<HttpResponse, AppError> {
    let req = request.into_inner();
    let name = req.name.trim();

    if name.is_empty() {
        return Err(AppError::InvalidRequest("Plan name is required".to_string()));
    }
    if !req.price.is_finite() || req.price < 0.0 {
        return Err(AppError::InvalidRequest(
            "Plan price must be a non-negative number".to_string(),
        ));
    }
    if db.get_plan_by_name(name)?.is_some() {
        return Err(AppError::InvalidRequest(format!(
            "Plan '{}' already exists",
            name
        )));
    }

    let plan = db.create_plan(name, req.description.as_deref(), req.price, &req.features)?;
    info!(plan_id = plan.id, name = %plan.name, "Created plan");

    Ok(HttpResponse::Created().json(PlanResponse::from(plan)))
}
