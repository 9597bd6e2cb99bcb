use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_form_options(ctx: &TestContext) {
    let response = ctx.client.get("/api/options").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let languages = body.get("languages").and_then(|v| v.as_array()).unwrap();
    let ids: Vec<&str> = languages
        .iter()
        .filter_map(|l| l.get("id").and_then(|v| v.as_str()))
        .collect();
    for expected in ["en", "hi", "ko", "ja"] {
        assert!(ids.contains(&expected), "missing language {}", expected);
    }

    let durations = body.get("durations").and_then(|v| v.as_array()).unwrap();
    let minutes: Vec<u64> = durations
        .iter()
        .filter_map(|d| d.get("minutes").and_then(|v| v.as_u64()))
        .collect();
    assert_eq!(minutes, vec![21, 41]);

    assert_eq!(body.get("speakers").and_then(|v| v.as_array()).unwrap().len(), 3);
    assert_eq!(body.get("domains").and_then(|v| v.as_array()).unwrap().len(), 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_single_language_with_dialects(ctx: &TestContext) {
    let response = ctx.client.get("/api/options/languages/ja").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("name").and_then(|v| v.as_str()), Some("Japanese"));
    assert_eq!(
        body.get("length_unit").and_then(|v| v.as_str()),
        Some("characters")
    );
    let dialects = body.get("dialects").and_then(|v| v.as_array()).unwrap();
    assert_eq!(
        dialects[0].get("id").and_then(|v| v.as_str()),
        Some("ja-JP")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_language(ctx: &TestContext) {
    let response = ctx.client.get("/api/options/languages/xx").await.unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("xx");
}
