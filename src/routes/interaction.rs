use super::{run_blocking, AppState, MessageDto};
use crate::app::interaction_create;
use crate::error::AppError;
use axum::extract::{Path, State};
use axum::Json;

pub async fn talk(
    State(state): State<AppState>,
    Path((zoo_id, worker_id, animal_id)): Path<(i64, i64, i64)>,
) -> Result<Json<MessageDto>, AppError> {
    run_blocking(&state.db, move |db| {
        interaction_create(db, zoo_id, worker_id, animal_id)
    })
    .await?;
    Ok(MessageDto::json("Conversation started successfully"))
}
