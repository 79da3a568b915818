mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test::{self, TestRequest};
use common::{create_invoice, seed_single_function_plan, setup_test_app};
use serde_json::json;

#[actix_rt::test]
async fn test_export_results_csv() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let seeded = seed_single_function_plan(&test_app.db)?;
    let uid = create_invoice(&test_app.db, seeded.plan_id)?;

    let req = TestRequest::post()
        .uri(&format!("/analysis/start/{uid}"))
        .set_json(json!([
            {"question_id": seeded.question_ids[0], "answer_id": 4},
            {"question_id": seeded.question_ids[1], "answer_id": 5}
        ]))
        .to_request();
    test::call_service(&test_app.app, req).await;

    let req = TestRequest::get()
        .uri(&format!("/analysis/export/{uid}"))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()?
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains(&format!("diagnosis_results_{uid}.csv")));

    let body = test::read_body(resp).await;
    let csv = String::from_utf8(body.to_vec())?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Function Name,Total Questions"));
    assert_eq!(lines[1], "People,2,0.0,0.0,0.0,50.0,50.0,87.5");
    Ok(())
}

#[actix_rt::test]
async fn test_export_answers_csv() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let seeded = seed_single_function_plan(&test_app.db)?;
    let uid = create_invoice(&test_app.db, seeded.plan_id)?;

    let req = TestRequest::post()
        .uri(&format!("/analysis/start/{uid}"))
        .set_json(json!([
            {"question_id": seeded.question_ids[1], "answer_id": 1},
            {"question_id": seeded.question_ids[0], "answer_id": 3}
        ]))
        .to_request();
    test::call_service(&test_app.app, req).await;

    let req = TestRequest::get()
        .uri(&format!("/analysis/export-results/{uid}"))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()?
        .contains(&format!("answers_{uid}.csv")));

    let body = test::read_body(resp).await;
    let csv = String::from_utf8(body.to_vec())?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Question,Function,Answer",
            "Is hiring planned?,People,Partially Implemented",
            "Are reviews held?,People,Not Applicable",
        ]
    );
    Ok(())
}

#[actix_rt::test]
async fn test_export_answers_unknown_invoice() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::get()
        .uri("/analysis/export-results/00000000-0000-4000-8000-000000000000")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}
