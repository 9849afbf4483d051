use super::{run_blocking, AppState, MessageDto};
use crate::app::assignment_create;
use crate::error::AppError;
use axum::extract::{Path, State};
use axum::Json;

pub async fn assign(
    State(state): State<AppState>,
    Path((zoo_id, animal_id, enclosure_id)): Path<(i64, i64, i64)>,
) -> Result<Json<MessageDto>, AppError> {
    run_blocking(&state.db, move |db| {
        assignment_create(db, zoo_id, animal_id, enclosure_id)
    })
    .await?;
    Ok(MessageDto::json("Animal added to enclosure successfully"))
}
