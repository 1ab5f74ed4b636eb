use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use serde::Deserialize;
use crate::error::ApiError;
use crate::models::{Player, PlayerStats, SearchResponse};
use crate::services::MlbService;

// Query parameters for searching players
#[derive(Deserialize)]
pub struct SearchQuery {
    query: String,
}

// Query parameters for player stats
#[derive(Deserialize)]
pub struct StatsQuery {
    /// Season year, e.g. 2024. Not forwarded when absent.
    #[serde(default)]
    season: Option<i32>,
    /// season, career, yearByYear, ...
    #[serde(default = "default_stats_type")]
    stats_type: String,
    /// hitting, pitching or fielding
    #[serde(default = "default_group")]
    group: String,
}

fn default_stats_type() -> String {
    "season".to_string()
}

fn default_group() -> String {
    "hitting".to_string()
}

// GET /players/search?query=Judge - Search players by name
pub async fn search_players(
    State(mlb): State<MlbService>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = query?;
    let results = mlb.search_players(&params.query).await.map_err(|e| {
        tracing::error!("Failed to search players for {:?}: {}", params.query, e);
        ApiError::from(e)
    })?;

    Ok(Json(results))
}

// GET /players/:id - Get player by ID
pub async fn get_player(
    State(mlb): State<MlbService>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(player_id) = path?;
    let player = mlb.get_player(player_id).await.map_err(|e| {
        tracing::error!("Failed to get player {}: {}", player_id, e);
        ApiError::from(e)
    })?;

    Ok(Json(player))
}

// GET /players/:id/stats?season=2024&stats_type=season&group=hitting
pub async fn get_player_stats(
    State(mlb): State<MlbService>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<StatsQuery>, QueryRejection>,
) -> Result<Json<PlayerStats>, ApiError> {
    let Path(player_id) = path?;
    let Query(params) = query?;
    let stats = mlb
        .get_player_stats(player_id, params.season, &params.stats_type, &params.group)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get stats for player {}: {}", player_id, e);
            ApiError::from(e)
        })?;

    Ok(Json(stats))
}
