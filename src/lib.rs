//! HTTP façade over the MLB Stats API, plus a small in-memory items demo.
//!
//! Both services are assembled here so the binaries and the integration
//! tests build the exact same routers.

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

use services::{ItemStore, MlbService};

/// Stats service: `/`, `/health` and the stats routes under `prefix`.
pub fn mlb_app(mlb: MlbService, prefix: &str) -> Router {
    let app = routes::health::router(routes::health::STATS_SERVICE);

    with_middleware(mount(app, prefix, routes::mlb_routes(mlb)))
}

/// Demo service: `/`, `/health` and the item routes under `prefix`.
pub fn items_app(store: ItemStore, prefix: &str) -> Router {
    let app = routes::health::router(routes::health::ITEMS_SERVICE);

    with_middleware(mount(app, prefix, routes::item_routes(store)))
}

// axum refuses to nest at the root, so an empty prefix merges instead
fn mount(app: Router, prefix: &str, routes: Router) -> Router {
    let prefix = config::normalize_prefix(prefix);
    if prefix.is_empty() {
        app.merge(routes)
    } else {
        app.nest(&prefix, routes)
    }
}

fn with_middleware(app: Router) -> Router {
    // In production, narrow the allowed origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}
