//! Cookie identity and named authorization policies.

mod common;

#[tokio::test]
async fn test_name_starting_with_b_is_granted() {
    let (addr, shutdown) = common::spawn_host().await;
    let client = reqwest::Client::new();

    let response = client
        .get(common::url(addr, "/api/restricted"))
        .header("Cookie", "identity=Bert")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Bert");

    shutdown.trigger();
}

#[tokio::test]
async fn test_other_names_are_forbidden() {
    let (addr, shutdown) = common::spawn_host().await;
    let client = reqwest::Client::new();

    for cookie in ["identity=Alice", "identity=bert"] {
        let response = client
            .get(common::url(addr, "/api/restricted"))
            .header("Cookie", cookie)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 403, "expected denial for {}", cookie);
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_anonymous_is_forbidden() {
    let (addr, shutdown) = common::spawn_host().await;

    let response = reqwest::get(common::url(addr, "/api/restricted"))
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    shutdown.trigger();
}

#[tokio::test]
async fn test_login_mints_identity_cookie() {
    let (addr, shutdown) = common::spawn_host().await;
    let client = reqwest::Client::new();

    let response = client
        .post(common::url(addr, "/api/auth/login?name=Bert"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 204);
    let cookie = response.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("identity=Bert"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_identity_flows_to_every_mount() {
    let (addr, shutdown) = common::spawn_host().await;
    let client = reqwest::Client::new();

    let response = client
        .get(common::url(addr, "/api/user"))
        .header("Cookie", "identity=Clara")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Clara");
    assert_eq!(body["authenticated"], true);

    shutdown.trigger();
}
