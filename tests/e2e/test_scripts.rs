use crate::e2e::helpers;

use helpers::assertions::{assert_pdf_document, assert_script_response};
use helpers::llm_mocks::{script_with_words, ScriptedTextRepository};
use helpers::{TestContext, SERVER_API_KEY};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use scriptgen_studio::domain::script::{LengthUnit, ScriptResponse};
use serde_json::{json, Value};
use test_context::test_context;

fn english_form(topic: &str) -> Value {
    json!({
        "topic": topic,
        "language": "en",
        "dialect": "en-US",
        "duration": "21",
        "speakers": "male_female",
        "domain": "healthcare"
    })
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_script_with_server_key(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/scripts", &english_form("Booking a follow-up appointment"))
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);

    let body = response.body.as_ref().unwrap();
    assert_script_response(body, "Booking a follow-up appointment");

    let script: ScriptResponse = response.json().unwrap();
    assert_eq!(script.length.unit, LengthUnit::Words);
    assert_eq!(script.length.count, 2200);
    assert_eq!(script.length.target_min, 2100);
    assert_eq!(script.length.target_max, 2500);
    assert_eq!(script.extension_attempts, 0);
    assert!(script.reached_target);
    assert!(script.warning.is_none());
    assert_eq!(script.speaker_turns, 220);

    assert_eq!(ctx.llm.keys(), vec![SERVER_API_KEY.to_string()]);
    let prompt = &ctx.llm.prompts()[0];
    assert!(prompt.contains("Booking a follow-up appointment"));
    assert!(prompt.contains("2100 to 2500 words"));
    assert!(prompt.contains("Healthcare"));
}

#[tokio::test]
async fn it_should_extend_short_scripts_until_target() {
    let llm = ScriptedTextRepository::long_enough();
    llm.push_response(Ok(script_with_words(1500)));
    llm.push_response(Ok(script_with_words(700)));
    let ctx = TestContext::start(llm, Some(SERVER_API_KEY)).await;

    let response = ctx
        .client
        .post("/api/scripts", &english_form("Disputing a card charge"))
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);

    let script: ScriptResponse = response.json().unwrap();
    assert_eq!(script.extension_attempts, 1);
    assert_eq!(script.length.count, 2200);
    assert!(script.reached_target);
    assert!(script.warning.is_none());

    let prompts = ctx.llm.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("The script currently has 1500 words."));
    assert!(prompts[1].contains("Write about 600 more words."));
}

#[tokio::test]
async fn it_should_warn_when_target_is_not_reached() {
    // Every call returns a short fragment, so all three extensions run
    let ctx = TestContext::start(
        ScriptedTextRepository::new(Ok(script_with_words(100))),
        Some(SERVER_API_KEY),
    )
    .await;

    let response = ctx
        .client
        .post("/api/scripts", &english_form("Resetting a password"))
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);

    let script: ScriptResponse = response.json().unwrap();
    assert_eq!(script.extension_attempts, 3);
    assert_eq!(script.length.count, 400);
    assert!(!script.reached_target);
    let warning = script.warning.expect("warning expected");
    assert!(warning.contains("Could not reach target length after 3 attempts"));
    assert!(warning.contains("400 of the 2100 words"));
    assert_eq!(ctx.llm.calls(), 4);
}

#[tokio::test]
async fn it_should_keep_partial_script_when_continuation_fails() {
    let llm = ScriptedTextRepository::new(Err("quota exhausted".to_string()));
    llm.push_response(Ok(script_with_words(1000)));
    let ctx = TestContext::start(llm, Some(SERVER_API_KEY)).await;

    let response = ctx
        .client
        .post("/api/scripts", &english_form("Loan refinancing"))
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);

    let script: ScriptResponse = response.json().unwrap();
    assert_eq!(script.length.count, 1000);
    assert_eq!(script.extension_attempts, 3);
    let warning = script.warning.expect("warning expected");
    assert!(warning.contains("quota exhausted"));
    assert_eq!(ctx.llm.calls(), 4);
}

#[tokio::test]
async fn it_should_resume_extension_after_failed_continuation() {
    let llm = ScriptedTextRepository::long_enough();
    llm.push_response(Ok(script_with_words(1500)));
    llm.push_response(Err("Gemini API error: HTTP 503: overloaded".to_string()));
    llm.push_response(Ok(script_with_words(700)));
    let ctx = TestContext::start(llm, Some(SERVER_API_KEY)).await;

    let response = ctx
        .client
        .post("/api/scripts", &english_form("Reporting a lost card"))
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);

    let script: ScriptResponse = response.json().unwrap();
    assert_eq!(script.extension_attempts, 2);
    assert_eq!(script.length.count, 2200);
    assert!(script.reached_target);
    assert!(script.warning.is_none());
}

#[tokio::test]
async fn it_should_return_long_scripts_untruncated() {
    let ctx = TestContext::start(
        ScriptedTextRepository::new(Ok(script_with_words(3000))),
        Some(SERVER_API_KEY),
    )
    .await;

    let response = ctx
        .client
        .post("/api/scripts", &english_form("Explaining a treatment plan"))
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);

    let script: ScriptResponse = response.json().unwrap();
    assert_eq!(script.length.count, 3000);
    assert!(script.length.exceeds_target());
    assert_eq!(script.extension_attempts, 0);
    assert!(script.warning.is_none());
    assert_eq!(script.script, script_with_words(3000));
}

#[tokio::test]
async fn it_should_return_500_when_provider_fails() {
    let ctx = TestContext::start(
        ScriptedTextRepository::new(Err("Gemini API error (503): overloaded".to_string())),
        Some(SERVER_API_KEY),
    )
    .await;

    let response = ctx
        .client
        .post("/api/scripts", &english_form("Upgrading a phone plan"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("overloaded");
}

#[tokio::test]
async fn it_should_require_api_key_without_server_key() {
    let ctx = TestContext::start(ScriptedTextRepository::long_enough(), None).await;

    let response = ctx
        .client
        .post("/api/scripts", &english_form("Insurance claim status"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Please enter your Gemini API key.");
    assert_eq!(
        response.body.as_ref().unwrap()["message"],
        "Please enter your Gemini API key."
    );
    assert_eq!(ctx.llm.calls(), 0);
}

#[tokio::test]
async fn it_should_use_api_key_from_request() {
    let ctx = TestContext::start(ScriptedTextRepository::long_enough(), None).await;

    let mut form = english_form("Insurance claim status");
    form["api_key"] = json!("user-supplied-key");

    let response = ctx.client.post("/api/scripts", &form).await.unwrap();

    response.assert_status(StatusCode::CREATED);
    assert_eq!(ctx.llm.keys(), vec!["user-supplied-key".to_string()]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_topic(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/scripts", &english_form("   "))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Please enter a topic.");
    assert_eq!(
        response.body.as_ref().unwrap()["message"],
        "Please enter a topic."
    );
    assert_eq!(ctx.llm.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_topic(ctx: &TestContext) {
    let mut form = english_form("unused");
    form.as_object_mut().unwrap().remove("topic");

    let response = ctx.client.post("/api/scripts", &form).await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Please enter a topic.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_dialect_from_another_language(ctx: &TestContext) {
    let mut form = english_form("Opening a savings account");
    form["dialect"] = json!("ko-KR");

    let response = ctx.client.post("/api/scripts", &form).await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("not available for English");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_language(ctx: &TestContext) {
    let mut form = english_form("Opening a savings account");
    form["language"] = json!("xx");

    let response = ctx.client.post("/api/scripts", &form).await.unwrap();

    assert!(response.status.is_client_error());
    assert_eq!(ctx.llm.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_json(ctx: &TestContext) {
    let response = ctx.client.post_raw("/api/scripts", "{not json").await.unwrap();

    assert!(response.status.is_client_error());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_measure_korean_in_characters(ctx: &TestContext) {
    let form = json!({
        "topic": "Checking an order",
        "language": "ko",
        "dialect": "ko-KR",
        "duration": "41",
        "speakers": "female_female",
        "domain": "call_center"
    });

    let response = ctx.client.post("/api/scripts", &form).await.unwrap();

    response.assert_status(StatusCode::CREATED);

    let script: ScriptResponse = response.json().unwrap();
    assert_eq!(script.length.unit, LengthUnit::Characters);
    assert_eq!(script.length.target_min, 4100 * 3);
    assert_eq!(script.length.target_max, 4800 * 3);
    let expected: usize = script.script.chars().filter(|c| !c.is_whitespace()).count();
    assert_eq!(script.length.count, expected);
    assert!(ctx.llm.prompts()[0].contains("characters"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fetch_generated_script(ctx: &TestContext) {
    let created: ScriptResponse = ctx
        .client
        .post("/api/scripts", &english_form("Prescription refill"))
        .await
        .unwrap()
        .json()
        .unwrap();

    let response = ctx
        .client
        .get(&format!("/api/scripts/{}", created.id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let fetched: ScriptResponse = response.json().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.script, created.script);
    assert_eq!(fetched.length, created.length);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_script(ctx: &TestContext) {
    let response = ctx
        .client
        .get(&format!("/api/scripts/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Script not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_script_id(ctx: &TestContext) {
    let response = ctx.client.get("/api/scripts/not-a-uuid").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_download_script_as_text(ctx: &TestContext) {
    let created: ScriptResponse = ctx
        .client
        .post("/api/scripts", &english_form("Prescription refill"))
        .await
        .unwrap()
        .json()
        .unwrap();

    let response = ctx.client.get(&created.downloads.txt).await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "text/plain; charset=utf-8")
        .assert_header("content-disposition", "attachment; filename=\"script.txt\"")
        .assert_header("x-script-id", &created.id.to_string());
    assert_eq!(response.text(), created.script);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_download_format_to_text(ctx: &TestContext) {
    let created: ScriptResponse = ctx
        .client
        .post("/api/scripts", &english_form("Prescription refill"))
        .await
        .unwrap()
        .json()
        .unwrap();

    let response = ctx
        .client
        .get(&format!("/api/scripts/{}/download", created.id))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "text/plain; charset=utf-8");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_download_script_as_pdf(ctx: &TestContext) {
    let created: ScriptResponse = ctx
        .client
        .post("/api/scripts", &english_form("Prescription refill"))
        .await
        .unwrap()
        .json()
        .unwrap();

    let response = ctx.client.get(&created.downloads.pdf).await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "application/pdf")
        .assert_header("content-disposition", "attachment; filename=\"script.pdf\"");
    assert_pdf_document(&response.body_bytes);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_download_format(ctx: &TestContext) {
    let created: ScriptResponse = ctx
        .client
        .post("/api/scripts", &english_form("Prescription refill"))
        .await
        .unwrap()
        .json()
        .unwrap();

    let response = ctx
        .client
        .get(&format!("/api/scripts/{}/download?format=docx", created.id))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}
