//! HTTP handlers (DTO boundary).

pub mod animal;
pub mod assignment;
pub mod enclosure;
pub mod interaction;
pub mod worker;
pub mod zoo;

use crate::error::AppError;
use crate::infra::Db;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Db,
    pub index_html: PathBuf,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    /// JSON body `{"message": ...}`.
    pub fn json(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Every data-layer failure is reported as 404, whatever its cause; the
/// `code` field in the body tells causes apart.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::NOT_FOUND,
        };
        (status, Json(self.to_serde())).into_response()
    }
}

/// Run a blocking store call off the async workers.
pub(crate) async fn run_blocking<T, F>(db: &Db, f: F) -> Result<T, AppError>
where
    F: FnOnce(&Db) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let db = db.clone();
    tokio::task::spawn_blocking(move || f(&db))
        .await
        .map_err(|e| AppError::Db(format!("store task failed: {}", e)))?
}

async fn root(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&state.index_html).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            log::debug!("landing page {:?} unavailable: {}", state.index_html, e);
            MessageDto::json("Zoo Management System").into_response()
        }
    }
}

async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();
    let resp = next.run(req).await;
    log::info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        resp.status().as_u16(),
        started.elapsed().as_millis()
    );
    resp
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/zoo", get(zoo::list).post(zoo::create))
        .route("/zoo/all", get(zoo::snapshot))
        .route("/zoo/{zoo_id}", delete(zoo::delete))
        .route("/animals/all", get(animal::list))
        .route(
            "/animals/{id}",
            post(animal::create).delete(animal::delete),
        )
        .route("/hungry/{zoo_id}", get(animal::list_hungry))
        .route(
            "/enclosure/{id}",
            get(enclosure::list_by_zoo)
                .post(enclosure::create)
                .delete(enclosure::delete),
        )
        .route("/enclosure/{id}/{enclosure_id}", get(enclosure::get_one))
        .route(
            "/worker/{id}",
            get(worker::list_by_zoo)
                .post(worker::create)
                .delete(worker::delete),
        )
        .route(
            "/assign_animals/{zoo_id}/{animal_id}/{enclosure_id}",
            put(assignment::assign),
        )
        .route(
            "/talk/{zoo_id}/{worker_id}/{animal_id}",
            post(interaction::talk),
        )
        .layer(axum::middleware::from_fn(log_requests))
        .layer(cors)
        .with_state(state)
}
