use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use crate::error::ApiError;
use crate::models::Item;
use crate::services::ItemStore;

fn not_found(item_id: i64) -> ApiError {
    ApiError::NotFound(format!("Item {item_id} not found"))
}

// GET /items - List all items
pub async fn get_items(State(store): State<ItemStore>) -> Json<Vec<Item>> {
    Json(store.list().await)
}

// GET /items/:id - Get item by ID
pub async fn get_item(
    State(store): State<ItemStore>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(item_id) = path?;
    let item = store.get(item_id).await.ok_or_else(|| not_found(item_id))?;

    Ok(Json(item))
}

// POST /items - Create an item; any id in the body is ignored
pub async fn create_item(
    State(store): State<ItemStore>,
    body: Result<Json<Item>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(item) = body?;
    let created = store.create(item).await;
    tracing::info!("Created item {:?}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /items/:id - Replace an item
pub async fn update_item(
    State(store): State<ItemStore>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(item_id) = path?;
    let Json(item) = body?;
    let updated = store
        .update(item_id, item)
        .await
        .ok_or_else(|| not_found(item_id))?;

    Ok(Json(updated))
}

// DELETE /items/:id - Delete an item
pub async fn delete_item(
    State(store): State<ItemStore>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(item_id) = path?;
    if !store.delete(item_id).await {
        return Err(not_found(item_id));
    }

    Ok(StatusCode::NO_CONTENT)
}
