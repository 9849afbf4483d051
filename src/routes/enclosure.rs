use super::{run_blocking, AppState, MessageDto};
use crate::app::{
    enclosure_create, enclosure_delete, enclosure_get, enclosure_list_by_zoo, EnclosureCreateReq,
    EnclosureDto,
};
use crate::error::AppError;
use axum::extract::{Path, State};
use axum::Json;

pub async fn list_by_zoo(
    State(state): State<AppState>,
    Path(zoo_id): Path<i64>,
) -> Result<Json<Vec<EnclosureDto>>, AppError> {
    run_blocking(&state.db, move |db| enclosure_list_by_zoo(db, zoo_id))
        .await
        .map(Json)
}

pub async fn get_one(
    State(state): State<AppState>,
    Path((zoo_id, enclosure_id)): Path<(i64, i64)>,
) -> Result<Json<EnclosureDto>, AppError> {
    run_blocking(&state.db, move |db| enclosure_get(db, zoo_id, enclosure_id))
        .await
        .map(Json)
}

pub async fn create(
    State(state): State<AppState>,
    Path(zoo_id): Path<i64>,
    Json(req): Json<EnclosureCreateReq>,
) -> Result<Json<EnclosureCreateReq>, AppError> {
    run_blocking(&state.db, move |db| enclosure_create(db, zoo_id, req))
        .await
        .map(Json)
}

/// `DELETE /enclosure/{enclosure_id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(enclosure_id): Path<i64>,
) -> Result<Json<MessageDto>, AppError> {
    run_blocking(&state.db, move |db| enclosure_delete(db, enclosure_id)).await?;
    Ok(MessageDto::json("Enclosure removed successfully"))
}
