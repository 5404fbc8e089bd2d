//! Session hub endpoints: descriptors, anchor resolution, live sessions.

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message;

mod common;

#[tokio::test]
async fn test_descriptor_lists_prebound_anchors() {
    let (addr, shutdown) = common::spawn_host().await;

    let response = reqwest::get(common::url(
        addr,
        "/startmodes/startmodeshost/preregistered/_blazor",
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["anchors"]["preregistered1"], "scope-component");
    assert_eq!(body["anchors"]["preregistered2"], "counter-component");

    shutdown.trigger();
}

#[tokio::test]
async fn test_anchor_resolution_is_per_anchor() {
    let (addr, shutdown) = common::spawn_host().await;

    let first: serde_json::Value = reqwest::get(common::url(
        addr,
        "/startmodes/startmodeshost/preregistered/_blazor?anchor=preregistered1",
    ))
    .await
    .unwrap()
    .json()
    .await
    .unwrap();

    let second: serde_json::Value = reqwest::get(common::url(
        addr,
        "/startmodes/startmodeshost/preregistered/_blazor?anchor=preregistered2",
    ))
    .await
    .unwrap()
    .json()
    .await
    .unwrap();

    assert_eq!(first["component"], "scope-component");
    assert_eq!(second["component"], "counter-component");
    assert_ne!(first["component"], second["component"]);

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_anchor_is_not_found() {
    let (addr, shutdown) = common::spawn_host().await;

    let response = reqwest::get(common::url(
        addr,
        "/startmodes/startmodeshost/preregistered/_blazor?anchor=preregistered3",
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_default_hub_has_no_prebindings() {
    let (addr, shutdown) = common::spawn_host().await;

    let body: serde_json::Value = reqwest::get(common::url(addr, "/_blazor"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["anchors"].as_object().unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn test_session_announces_then_accepts_lazy_attach() {
    let (addr, shutdown) = common::spawn_host().await;

    let url = format!(
        "ws://{}/startmodes/startmodeshost/mixed/_blazor",
        addr
    );
    let (mut socket, _) = tokio_tungstenite::connect_async(url.as_str()).await.unwrap();

    // Pre-registered bindings arrive first, in anchor order.
    let mut announced = Vec::new();
    for _ in 0..2 {
        let frame = socket.next().await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(frame.to_text().unwrap()).unwrap();
        assert_eq!(value["type"], "componentAttached");
        assert_eq!(value["preregistered"], true);
        announced.push(value["anchor"].as_str().unwrap().to_string());
    }
    assert_eq!(announced, ["mixed1", "mixed2"]);

    // Lazily declare one more anchor.
    socket
        .send(Message::text(
            r#"{"type":"attach","anchor":"lazy1","component":"scope-component"}"#,
        ))
        .await
        .unwrap();
    let frame = socket.next().await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(frame.to_text().unwrap()).unwrap();
    assert_eq!(value["type"], "componentAttached");
    assert_eq!(value["preregistered"], false);
    assert_eq!(value["anchor"], "lazy1");

    // Re-binding a pre-registered anchor is rejected.
    socket
        .send(Message::text(
            r#"{"type":"attach","anchor":"mixed1","component":"scope-component"}"#,
        ))
        .await
        .unwrap();
    let frame = socket.next().await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(frame.to_text().unwrap()).unwrap();
    assert_eq!(value["type"], "error");

    socket.close(None).await.unwrap();
    shutdown.trigger();
}
