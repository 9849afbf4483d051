use super::{run_blocking, AppState, MessageDto};
use crate::app::{
    animal_create, animal_delete, animal_list, animal_list_hungry, AnimalCreateReq, AnimalDto,
};
use crate::error::AppError;
use axum::extract::{Path, State};
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AnimalDto>>, AppError> {
    run_blocking(&state.db, animal_list).await.map(Json)
}

pub async fn list_hungry(
    State(state): State<AppState>,
    Path(zoo_id): Path<i64>,
) -> Result<Json<Vec<AnimalDto>>, AppError> {
    run_blocking(&state.db, move |db| animal_list_hungry(db, zoo_id))
        .await
        .map(Json)
}

/// `POST /animals/{zoo_id}`
pub async fn create(
    State(state): State<AppState>,
    Path(zoo_id): Path<i64>,
    Json(req): Json<AnimalCreateReq>,
) -> Result<Json<AnimalCreateReq>, AppError> {
    run_blocking(&state.db, move |db| animal_create(db, zoo_id, req))
        .await
        .map(Json)
}

/// `DELETE /animals/{animal_id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(animal_id): Path<i64>,
) -> Result<Json<MessageDto>, AppError> {
    run_blocking(&state.db, move |db| animal_delete(db, animal_id)).await?;
    Ok(MessageDto::json("Animal removed successfully"))
}
