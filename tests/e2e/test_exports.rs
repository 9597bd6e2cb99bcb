use crate::e2e::helpers;

use helpers::assertions::assert_pdf_document;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

const EDITED_SCRIPT: &str = "Speaker A: Good morning, how can I help?\nSpeaker B: I need to move my appointment.";

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_export_edited_text_as_txt(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/exports?format=txt", &json!({ "script": EDITED_SCRIPT }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "text/plain; charset=utf-8")
        .assert_header("content-disposition", "attachment; filename=\"script.txt\"");
    assert_eq!(response.text(), EDITED_SCRIPT);
    assert_eq!(ctx.llm.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_export_edited_text_as_pdf(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/exports?format=pdf", &json!({ "script": EDITED_SCRIPT }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "application/pdf")
        .assert_header("content-disposition", "attachment; filename=\"script.pdf\"");
    assert_pdf_document(&response.body_bytes);

    let body = String::from_utf8_lossy(&response.body_bytes);
    assert!(body.contains("(Speaker A: Good morning, how can I help?) Tj"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_export_pdf_even_without_latin_glyphs(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/exports?format=pdf", &json!({ "script": "Speaker A: 안녕하세요" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_pdf_document(&response.body_bytes);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_export(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/exports?format=pdf", &json!({ "script": "  \n " }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Script text cannot be empty");
}
