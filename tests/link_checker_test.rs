mod server;

use b3acon::http_client::build_http_client;
use b3acon::link_checker::LinkChecker;
use server::get_test_server_url;

#[tokio::test]
async fn test_statuses_reported_per_link() {
    let base_url = get_test_server_url().await;
    let client = build_http_client(10).expect("Failed to build HTTP client");
    let checker = LinkChecker::new(client);

    let urls = vec![
        format!("{}/ok", base_url),
        format!("{}/not-found", base_url),
        format!("{}/server-error", base_url),
    ];
    let results = checker.check_urls(&urls).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].status, 200);
    assert_eq!(results[0].error, None);
    assert_eq!(results[1].status, 404);
    assert_eq!(results[2].status, 500);
}

#[tokio::test]
async fn test_failed_link_does_not_abort_batch() {
    let base_url = get_test_server_url().await;
    let client = build_http_client(30).expect("Failed to build HTTP client");
    let checker = LinkChecker::new(client);

    // Connection-refused in the middle of the batch; neighbors unaffected
    let urls = vec![
        format!("{}/ok", base_url),
        "http://127.0.0.1:9/unreachable".to_string(),
        format!("{}/ok", base_url),
    ];
    let results = checker.check_urls(&urls).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].status, 200);
    assert_eq!(results[1].status, 0);
    assert!(
        results[1].error.as_deref().is_some_and(|e| !e.is_empty()),
        "Failed link should carry a non-empty error"
    );
    assert_eq!(results[2].status, 200);
}

#[tokio::test]
async fn test_slow_link_times_out_as_failure() {
    let base_url = get_test_server_url().await;
    let client = build_http_client(30).expect("Failed to build HTTP client");
    let checker = LinkChecker::new(client);

    let urls = vec![format!("{}/slow", base_url), format!("{}/ok", base_url)];
    let results = checker.check_urls(&urls).await;

    assert_eq!(results[0].status, 0, "8s handler must trip the 5s timeout");
    assert!(results[0].error.is_some());
    assert_eq!(results[1].status, 200);
}

#[tokio::test]
async fn test_results_preserve_input_order() {
    let base_url = get_test_server_url().await;
    let client = build_http_client(10).expect("Failed to build HTTP client");
    let checker = LinkChecker::new(client);

    let urls: Vec<String> = (0..10)
        .map(|i| {
            if i % 2 == 0 {
                format!("{}/ok?n={}", base_url, i)
            } else {
                format!("{}/not-found?n={}", base_url, i)
            }
        })
        .collect();
    let results = checker.check_urls(&urls).await;

    let returned: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    let expected: Vec<&str> = urls.iter().map(|u| u.as_str()).collect();
    assert_eq!(returned, expected);
}
