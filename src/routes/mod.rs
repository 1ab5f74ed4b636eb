use axum::{routing::get, Router};
use crate::services::{ItemStore, MlbService};

pub mod health;
pub mod items;
pub mod players;
pub mod teams;

/// Stats endpoints, relative to the configured prefix
pub fn mlb_routes(mlb: MlbService) -> Router {
    Router::new()
        // Player endpoints
        .route("/players/search", get(players::search_players))
        .route("/players/{id}", get(players::get_player))
        .route("/players/{id}/stats", get(players::get_player_stats))

        // Team endpoints
        .route("/teams", get(teams::get_teams))
        .route("/teams/{id}", get(teams::get_team))
        .route("/teams/{id}/roster", get(teams::get_team_roster))

        .with_state(mlb)
}

/// Demo CRUD endpoints, relative to the configured prefix
pub fn item_routes(store: ItemStore) -> Router {
    Router::new()
        .route("/items", get(items::get_items).post(items::create_item))
        .route(
            "/items/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .with_state(store)
}
