use b3acon::http_client::build_http_client;
use b3acon::indexnow::IndexNowClient;

#[tokio::test]
async fn test_keyless_submission_reports_not_configured() {
    let client = build_http_client(10).expect("Failed to build HTTP client");
    let indexnow = IndexNowClient::new(client, None, None);

    let outcome = indexnow
        .submit(&["https://example.com/page".to_string()])
        .await
        .expect("Keyless submission must not fail");

    assert!(!outcome.success);
    assert!(outcome.message.contains("not configured"));
}

#[tokio::test]
async fn test_submission_with_key_requires_urls() {
    let client = build_http_client(10).expect("Failed to build HTTP client");
    let indexnow = IndexNowClient::new(client, Some("abc123".to_string()), None);

    let result = indexnow.submit(&[]).await;
    assert!(result.is_err(), "Empty URL list has no host to derive");
}
