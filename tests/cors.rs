//! CORS behavior across mounts.

mod common;

#[tokio::test]
async fn test_preflight_echoes_allowed_origin() {
    let (addr, shutdown) = common::spawn_host().await;
    let client = reqwest::Client::new();

    for path in ["/api/greeting", "/prerendered/PrerenderedHost", "/subdir/_blazor"] {
        let response = client
            .request(reqwest::Method::OPTIONS, common::url(addr, path))
            .header("Origin", "http://localhost:9000")
            .header("Access-Control-Request-Method", "GET")
            .header("Access-Control-Request-Headers", "x-custom-probe")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 204, "preflight failed for {}", path);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "http://localhost:9000"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-credentials")
                .unwrap(),
            "true"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-methods")
                .unwrap(),
            "GET"
        );
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_loopback_origin_echoed_on_simple_request() {
    let (addr, shutdown) = common::spawn_host().await;
    let client = reqwest::Client::new();

    let response = client
        .get(common::url(addr, "/api/greeting"))
        .header("Origin", "http://127.0.0.1:5500")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "http://127.0.0.1:5500"
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-expose-headers")
            .unwrap(),
        "MyCustomHeader"
    );
    assert_eq!(response.headers().get("mycustomheader").unwrap(), "From the server");

    shutdown.trigger();
}

#[tokio::test]
async fn test_disallowed_origin_omits_allow_headers_but_serves_body() {
    let (addr, shutdown) = common::spawn_host().await;
    let client = reqwest::Client::new();

    let response = client
        .get(common::url(addr, "/api/greeting"))
        .header("Origin", "http://evil.example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Hello");

    shutdown.trigger();
}

#[tokio::test]
async fn test_static_files_bypass_cors() {
    let (addr, shutdown) = common::spawn_host().await;
    let client = reqwest::Client::new();

    // A file hit terminates the chain before CORS runs, even for an origin
    // the allow-rule would grant.
    let response = client
        .get(common::url(addr, "/subdir/bundle.js"))
        .header("Origin", "http://localhost:9000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
    assert!(response.text().await.unwrap().contains("subdir bundle"));

    shutdown.trigger();
}
