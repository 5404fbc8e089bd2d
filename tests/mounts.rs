//! Mount table behavior: isolation, fallbacks, path-base strip.

mod common;

#[tokio::test]
async fn test_subdir_serves_bundle_and_falls_back_to_index() {
    let (addr, shutdown) = common::spawn_host().await;

    // Static hit.
    let response = reqwest::get(common::url(addr, "/subdir/index.html"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("data-bundle=\"subdir\""));

    // No file and no route: the mount's fallback serves the same document.
    let response = reqwest::get(common::url(addr, "/subdir/deep/client/route"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("data-bundle=\"subdir\""));

    shutdown.trigger();
}

#[tokio::test]
async fn test_prerendered_fallback_sees_stripped_path() {
    let (addr, shutdown) = common::spawn_host().await;

    let response = reqwest::get(common::url(addr, "/prerendered/anything-unmatched"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("data-page=\"PrerenderedHost\""));
    // The mount prefix is gone from the inner route value.
    assert!(body.contains("data-inner-path=\"/anything-unmatched\""));

    shutdown.trigger();
}

#[tokio::test]
async fn test_start_modes_fallback_route_binds_mode() {
    let (addr, shutdown) = common::spawn_host().await;

    let response = reqwest::get(common::url(addr, "/startmodes/startmodeshost/prerendered"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response
        .text()
        .await
        .unwrap()
        .contains("data-mode=\"prerendered\""));

    shutdown.trigger();
}

#[tokio::test]
async fn test_mounts_are_isolated() {
    let (addr, shutdown) = common::spawn_host().await;

    // A route defined only under /startmodes is unreachable at root.
    let response = reqwest::get(common::url(addr, "/startmodeshost/prerendered"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    // And a root controller is unreachable under /startmodes.
    let response = reqwest::get(common::url(addr, "/startmodes/api/greeting"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_prefix_match_respects_segment_boundaries() {
    let (addr, shutdown) = common::spawn_host().await;

    // "/subdirectory" must not select the /subdir mount; the root mount has
    // no such route or file, so this is a plain 404 rather than the subdir
    // bundle fallback.
    let response = reqwest::get(common::url(addr, "/subdirectory"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_root_mount_serves_pages_and_static() {
    let (addr, shutdown) = common::spawn_host().await;

    let response = reqwest::get(common::url(addr, "/")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("data-page=\"Index\""));

    let response = reqwest::get(common::url(addr, "/css/site.css")).await.unwrap();
    assert_eq!(response.status(), 200);

    shutdown.trigger();
}
