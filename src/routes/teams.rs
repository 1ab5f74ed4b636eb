use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};
use crate::error::ApiError;
use crate::models::{RosterPlayer, Team};
use crate::services::MlbService;

// GET /teams - List all MLB teams
pub async fn get_teams(
    State(mlb): State<MlbService>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = mlb.get_teams().await.map_err(|e| {
        tracing::error!("Failed to get teams: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(teams))
}

// GET /teams/:id - Get team by ID
pub async fn get_team(
    State(mlb): State<MlbService>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Team>, ApiError> {
    let Path(team_id) = path?;
    let team = mlb.get_team(team_id).await.map_err(|e| {
        tracing::error!("Failed to get team {}: {}", team_id, e);
        ApiError::from(e)
    })?;

    Ok(Json(team))
}

// GET /teams/:id/roster - Get a team's active roster
pub async fn get_team_roster(
    State(mlb): State<MlbService>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<RosterPlayer>>, ApiError> {
    let Path(team_id) = path?;
    let roster = mlb.get_team_roster(team_id).await.map_err(|e| {
        tracing::error!("Failed to get roster for team {}: {}", team_id, e);
        ApiError::from(e)
    })?;

    Ok(Json(roster))
}
