use mlb_stats_api::{config::ItemsSettings, services::ItemStore, telemetry};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    telemetry::init_tracing();

    tracing::info!("Starting items api server...");

    let settings = ItemsSettings::from_env()
        .expect("Invalid configuration");

    let app = mlb_stats_api::items_app(ItemStore::new(), &settings.route_prefix);

    let addr = settings.server.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {} (routes under {:?})", addr, settings.route_prefix);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
