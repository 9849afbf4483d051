use super::{run_blocking, AppState, MessageDto};
use crate::app::{worker_create, worker_delete, worker_list_by_zoo, WorkerCreateReq, WorkerDto};
use crate::error::AppError;
use axum::extract::{Path, State};
use axum::Json;

pub async fn list_by_zoo(
    State(state): State<AppState>,
    Path(zoo_id): Path<i64>,
) -> Result<Json<Vec<WorkerDto>>, AppError> {
    run_blocking(&state.db, move |db| worker_list_by_zoo(db, zoo_id))
        .await
        .map(Json)
}

pub async fn create(
    State(state): State<AppState>,
    Path(zoo_id): Path<i64>,
    Json(req): Json<WorkerCreateReq>,
) -> Result<Json<WorkerCreateReq>, AppError> {
    run_blocking(&state.db, move |db| worker_create(db, zoo_id, req))
        .await
        .map(Json)
}

/// `DELETE /worker/{worker_id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(worker_id): Path<i64>,
) -> Result<Json<MessageDto>, AppError> {
    run_blocking(&state.db, move |db| worker_delete(db, worker_id)).await?;
    Ok(MessageDto::json("Worker removed successfully"))
}
