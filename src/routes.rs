//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the Leptos SSR landing page, the compiled WASM bundle under
//! `/pkg`, static assets under `/assets` and a health check into a single
//! Axum router.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ServerError;

/// Routes that do not involve Leptos rendering.
pub fn static_routes(assets_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(not_found)
}

/// Full site router for explicit Leptos options.
pub fn site_routes(leptos_options: LeptosOptions, assets_dir: &Path) -> Router {
    let routes = generate_route_list(site::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    static_routes(assets_dir)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Site router configured from the `LEPTOS_*` environment that cargo-leptos
/// exports from `[[workspace.metadata.leptos]]`. Unset variables fall back
/// to Leptos defaults.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(config: &Config) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    Ok(site_routes(conf.leptos_options, &config.assets_dir))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found.")
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
