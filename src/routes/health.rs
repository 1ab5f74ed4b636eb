use axum::{response::Json, routing::get, Router};
use serde::Serialize;

/// Name and version a deployment reports on `/` and `/health`.
#[derive(Debug, Clone, Copy)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

pub const STATS_SERVICE: ServiceInfo = ServiceInfo {
    name: "MLB Stats API",
    version: "v1.0",
};

pub const ITEMS_SERVICE: ServiceInfo = ServiceInfo {
    name: "Items API",
    version: "v0.1",
};

#[derive(Serialize)]
pub struct HealthReport {
    status: &'static str,
    service: &'static str,
    timestamp: i64,
}

#[derive(Serialize)]
pub struct Welcome {
    message: String,
}

impl ServiceInfo {
    fn health(self) -> HealthReport {
        HealthReport {
            status: "ok",
            service: self.name,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    fn welcome(self) -> Welcome {
        Welcome {
            message: format!("{} - {}", self.name, self.version),
        }
    }
}

// GET / and GET /health, mounted outside the route prefix
pub fn router(info: ServiceInfo) -> Router {
    Router::new()
        .route("/", get(move || async move { Json(info.welcome()) }))
        .route("/health", get(move || async move { Json(info.health()) }))
}
