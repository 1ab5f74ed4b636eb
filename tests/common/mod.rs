//! Shared fixtures: an in-process fake of the MLB Stats API and body helpers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, Query},
    http::{Request, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use mlb_stats_api::{config::UpstreamSettings, services::MlbService};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Player id the fake upstream answers with an empty `people` array
pub const UNKNOWN_PLAYER_ID: i64 = 404;
/// Team id whose roster response has no `roster` key
pub const EMPTY_ROSTER_TEAM_ID: i64 = 999;

pub fn person(id: i64, full_name: &str) -> Value {
    let (first, last) = full_name.split_once(' ').unwrap_or((full_name, ""));
    json!({
        "id": id,
        "fullName": full_name,
        "link": format!("/api/v1/people/{id}"),
        "firstName": first,
        "lastName": last,
        "primaryNumber": "99",
        "currentTeam": {"id": 147, "link": "/api/v1/teams/147"},
        "active": true,
        "isPlayer": true,
        "isVerified": true,
        "batSide": {"code": "R", "description": "Right"}
    })
}

pub fn team(id: i64, name: &str, abbreviation: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "link": format!("/api/v1/teams/{id}"),
        "season": 2024,
        "teamCode": abbreviation.to_lowercase(),
        "abbreviation": abbreviation,
        "teamName": name.rsplit(' ').next().unwrap_or(name),
        "locationName": "Somewhere",
        "league": {"id": 103, "name": "American League", "link": "/api/v1/league/103"},
        "division": {"id": 201, "name": "American League East", "link": "/api/v1/divisions/201"},
        "active": true
    })
}

/// Routes mirroring the upstream paths the service calls.
pub fn fake_upstream() -> Router {
    Router::new()
        .route("/people/search", get(search))
        .route("/people/{id}", get(people))
        .route("/people/{id}/stats", get(stats))
        .route("/teams", get(teams))
        .route("/teams/{id}", get(team_by_id))
        .route("/teams/{id}/roster", get(roster))
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    if params.get("names").map(String::as_str) == Some("Judge")
        && params.get("sportId").map(String::as_str) == Some("1")
    {
        Json(json!({"people": [person(592450, "Aaron Judge")], "totalSize": 1}))
    } else {
        Json(json!({"people": []}))
    }
}

async fn people(Path(id): Path<i64>) -> Json<Value> {
    if id == UNKNOWN_PLAYER_ID {
        return Json(json!({"copyright": "test", "people": []}));
    }
    Json(json!({"copyright": "test", "people": [person(id, "Aaron Judge")]}))
}

// Echoes the received query so tests can check the parameter mapping
async fn stats(Path(id): Path<i64>, Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let mut body = json!({
        "type": {"displayName": params.get("stats").cloned().unwrap_or_default()},
        "group": {"displayName": params.get("group").cloned().unwrap_or_default()},
        "stats": [{"player": {"id": id}, "stat": {"avg": ".300", "homeRuns": 58}}]
    });
    if let Some(season) = params.get("season") {
        body["season"] = json!(season);
    }
    Json(body)
}

async fn teams(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("sportId").map(String::as_str) != Some("1") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    Json(json!({
        "teams": [
            team(147, "New York Yankees", "NYY"),
            team(111, "Boston Red Sox", "BOS"),
            team(139, "Tampa Bay Rays", "TB")
        ]
    }))
    .into_response()
}

async fn team_by_id(Path(id): Path<i64>) -> Json<Value> {
    Json(json!({"teams": [team(id, "New York Yankees", "NYY"), team(id + 1, "Decoy Team", "DEC")]}))
}

async fn roster(Path(id): Path<i64>, Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("rosterType").map(String::as_str) != Some("active") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if id == EMPTY_ROSTER_TEAM_ID {
        return Json(json!({"link": format!("/api/v1/teams/{id}/roster")})).into_response();
    }
    Json(json!({
        "roster": [
            {
                "person": {"id": 592450, "fullName": "Aaron Judge", "link": "/api/v1/people/592450"},
                "jerseyNumber": "99",
                "position": {"code": "9", "name": "Outfielder", "type": "Outfielder", "abbreviation": "RF"},
                "status": {"code": "A", "description": "Active"},
                "parentTeamId": id
            },
            {
                "person": {"id": 543037, "fullName": "Gerrit Cole", "link": "/api/v1/people/543037"},
                "jerseyNumber": "45",
                "position": {"code": "1", "name": "Pitcher", "type": "Pitcher", "abbreviation": "P"},
                "parentTeamId": id
            }
        ]
    }))
    .into_response()
}

/// Upstream that answers every request with `status` and a plain-text body.
pub fn failing_upstream(status: StatusCode, body: &'static str) -> Router {
    Router::new().fallback(move || async move { (status, body) })
}

/// Upstream that waits `delay` before answering every request with `{}`.
pub fn slow_upstream(delay: Duration) -> Router {
    Router::new().fallback(move || async move {
        tokio::time::sleep(delay).await;
        Json(json!({}))
    })
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn service_for(base_url: &str) -> MlbService {
    MlbService::new(&UpstreamSettings::with_base_url(base_url)).unwrap()
}

pub fn service_with_read_timeout(base_url: &str, read_timeout: Duration) -> MlbService {
    let settings = UpstreamSettings {
        read_timeout,
        ..UpstreamSettings::with_base_url(base_url)
    };
    MlbService::new(&settings).unwrap()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response) -> axum::body::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
