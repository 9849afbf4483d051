use super::{run_blocking, AppState, MessageDto};
use crate::app::{
    zoo_create, zoo_delete, zoo_list, zoo_snapshot, ZooCreateReq, ZooDto, ZooSnapshotDto,
};
use crate::error::AppError;
use axum::extract::{Path, State};
use axum::Json;

/// `GET /zoo/all`
pub async fn snapshot(
    State(state): State<AppState>,
) -> Result<Json<Vec<ZooSnapshotDto>>, AppError> {
    run_blocking(&state.db, zoo_snapshot).await.map(Json)
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ZooDto>>, AppError> {
    run_blocking(&state.db, zoo_list).await.map(Json)
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<ZooCreateReq>,
) -> Result<Json<ZooCreateReq>, AppError> {
    run_blocking(&state.db, move |db| zoo_create(db, req))
        .await
        .map(Json)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(zoo_id): Path<i64>,
) -> Result<Json<MessageDto>, AppError> {
    run_blocking(&state.db, move |db| zoo_delete(db, zoo_id)).await?;
    Ok(MessageDto::json("Zoo removed successfully"))
}
