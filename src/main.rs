use mlb_stats_api::{config::StatsSettings, services::MlbService, telemetry};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    telemetry::init_tracing();

    tracing::info!("Starting MLB stats api server...");

    let settings = StatsSettings::from_env()
        .expect("Invalid configuration");

    let mlb = MlbService::new(&settings.upstream)
        .expect("Failed to build upstream HTTP client");

    tracing::info!("Forwarding to upstream at {}", mlb.base_url());

    let app = mlb_stats_api::mlb_app(mlb, &settings.route_prefix);

    let addr = settings.server.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {} (routes under {:?})", addr, settings.route_prefix);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
