use actix_web::{App, HttpResponse, HttpServer, web};

/// Page served at `/`, exercising a healthy document.
pub const HEALTHY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>A perfectly reasonable page title for testing</title>
  <meta name="description" content="A meta description that is comfortably long enough to satisfy the recommended length checks for search engine snippets shown in result pages.">
</head>
<body>
  <h1>Welcome to the test page</h1>
  <p><a href="/about">About our company</a></p>
  <p><a href="/contact">Contact the team</a></p>
  <p><a href="/pricing">Pricing details</a></p>
</body>
</html>"#;

/// Spawns a test server with inline routes on an ephemeral port and
/// returns its base URL.
pub async fn get_test_server_url() -> String {
    let http_server = HttpServer::new(|| {
        App::new()
            .route(
                "/",
                web::route().to(|| async {
                    HttpResponse::Ok().content_type("text/html").body(HEALTHY_PAGE)
                }),
            )
            .route(
                "/ok",
                web::route().to(|| async { HttpResponse::Ok().body("OK") }),
            )
            .route(
                "/not-found",
                web::route().to(|| async { HttpResponse::NotFound().body("Not Found") }),
            )
            .route(
                "/server-error",
                web::route().to(|| async { HttpResponse::InternalServerError().body("Error") }),
            )
            .route(
                "/slow",
                web::route().to(|| async {
                    tokio::time::sleep(std::time::Duration::from_secs(8)).await;
                    HttpResponse::Ok().body("finally")
                }),
            )
            .route(
                "/proxy",
                web::route().to(|query: web::Query<ProxyQuery>| async move {
                    // Mimics the CORS relay envelope for the given target
                    let _ = &query.url;
                    HttpResponse::Ok().json(serde_json::json!({
                        "contents": HEALTHY_PAGE,
                        "status": { "http_code": 200 }
                    }))
                }),
            )
            .route(
                "/proxy-broken",
                web::route().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({ "status": "no contents here" }))
                }),
            )
    })
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = http_server
        .addrs()
        .first()
        .cloned()
        .expect("No address bound");
    let url = format!("http://{}", addr);

    let app_server = http_server.run();

    tokio::spawn(async move {
        if let Err(e) = app_server.await {
            eprintln!("Test server error: {}", e);
        }
    });

    url
}

#[derive(serde::Deserialize)]
pub struct ProxyQuery {
    pub url: String,
}
