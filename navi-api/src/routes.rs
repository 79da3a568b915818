use crate::error::AppError;
use crate::handlers::{answers, catalog, health, invoices, plans, questions, results};
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/analysis")
            .route("/health", web::get().to(health::health_check))
            // Catalog seeding
            .route(
                "/create-functions/",
                web::post().to(catalog::create_functions),
            )
            .route(
                "/create-questions/",
                web::post().to(catalog::create_questions),
            )
            .route("/plans", web::get().to(plans::list_plans))
            .route("/plans", web::post().to(plans::create_plan))
            .route("/invoice/", web::post().to(invoices::create_invoice))
            // Assessment flow, keyed by invoice uid
            .route(
                "/questions/{invoice_uid}",
                web::get().to(questions::get_questions),
            )
            .route("/start/{invoice_uid}", web::post().to(answers::submit_answers))
            .route("/result/{invoice_uid}", web::get().to(results::get_results))
            .route("/export/{invoice_uid}", web::get().to(results::export_results))
            .route(
                "/export-results/{invoice_uid}",
                web::get().to(results::export_answers),
            ),
    );
}

/// Malformed JSON bodies get the same `{"error": ...}` shape as other 400s.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into())
}
