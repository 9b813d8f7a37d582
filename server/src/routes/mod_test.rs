use super::*;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

const INDEX_HTML: &str = "<!doctype html><html><body>portfolio</body></html>";

static SITE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_site() -> PathBuf {
    let n = SITE_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("portfolio-site-{}-{n}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.join("app.css"), "body{}").unwrap();
    dir
}

fn config_for(site_dir: PathBuf) -> ServerConfig {
    ServerConfig { host: crate::config::DEFAULT_HOST, port: 0, site_dir }
}

async fn get_path(router: Router, path: &str) -> (StatusCode, String) {
    let resp = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let site = temp_site();
    let (status, _) = get_path(app(&config_for(site.clone())), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    let _ = std::fs::remove_dir_all(site);
}

#[tokio::test]
async fn root_serves_index() {
    let site = temp_site();
    let (status, body) = get_path(app(&config_for(site.clone())), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);
    let _ = std::fs::remove_dir_all(site);
}

#[tokio::test]
async fn existing_asset_is_served_directly() {
    let site = temp_site();
    let (status, body) = get_path(app(&config_for(site.clone())), "/app.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body{}");
    let _ = std::fs::remove_dir_all(site);
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let site = temp_site();
    for path in ["/about", "/projects", "/experience", "/certificates", "/no/such/page"] {
        let (status, body) = get_path(app(&config_for(site.clone())), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, INDEX_HTML, "{path}");
    }
    let _ = std::fs::remove_dir_all(site);
}
