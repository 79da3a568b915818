mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use common::{seed_single_function_plan, setup_test_app};
use serde_json::json;
use uuid::Uuid;

#[actix_rt::test]
async fn test_create_invoice() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let seeded = seed_single_function_plan(&test_app.db)?;

    let req = TestRequest::post()
        .uri("/analysis/invoice/")
        .set_json(json!({"plan": seeded.plan_id, "amount": 25.0, "email": "ops@example.com"}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let uid = Uuid::parse_str(body["uid"].as_str().unwrap())?;

    let invoice = test_app.db.get_invoice_by_uid(&uid)?.unwrap();
    assert_eq!(invoice.plan_id, seeded.plan_id);
    assert!(invoice.is_paid);
    assert_eq!(invoice.email.as_deref(), Some("ops@example.com"));
    Ok(())
}

#[actix_rt::test]
async fn test_create_invoice_unknown_plan() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/analysis/invoice/")
        .set_json(json!({"plan": 42, "amount": 10.0}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Plan 42 does not exist");
    Ok(())
}

#[actix_rt::test]
async fn test_create_invoice_malformed_body() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/analysis/invoice/")
        .set_json(json!({"amount": 10.0}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    Ok(())
}

#[actix_rt::test]
async fn test_create_invoice_negative_amount() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let seeded = seed_single_function_plan(&test_app.db)?;

    let req = TestRequest::post()
        .uri("/analysis/invoice/")
        .set_json(json!({"plan": seeded.plan_id, "amount": -1.0}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[actix_rt::test]
async fn test_plans_create_and_list() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/analysis/plans")
        .set_json(json!({"name": "Gold", "price": 99.0, "features": ["export"]}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let duplicate = TestRequest::post()
        .uri("/analysis/plans")
        .set_json(json!({"name": "Gold", "price": 10.0}))
        .to_request();
    let resp = test::call_service(&test_app.app, duplicate).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::get().uri("/analysis/plans").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&test_app.app, req).await;
    let plans = body["plans"].as_array().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0]["name"], "Gold");
    assert_eq!(plans[0]["features"], json!(["export"]));
    Ok(())
}

#[actix_rt::test]
async fn test_health() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::get().uri("/analysis/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(body["status"], "ok");
    Ok(())
}
