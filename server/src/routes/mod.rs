//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio is a client-side-rendered bundle. Every path that is not a
//! file under the site directory gets `index.html`, so deep links such as
//! `/projects` load the app and let its router pick the page.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Static site router: `/healthz` plus the built bundle with SPA fallback.
pub fn app(config: &ServerConfig) -> Router {
    let index = ServeFile::new(config.site_dir.join("index.html"));
    let site = ServeDir::new(&config.site_dir)
        .append_index_html_on_directories(true)
        .fallback(index);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
