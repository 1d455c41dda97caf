//! HTTP surface of the todo service.
//!
//! Five routes under `/api/todos` map one-to-one onto [`Store`] operations.
//! The store is injected as shared state rather than living in a global, so
//! every [`app`] starts empty and tests can seed a store of their own through
//! [`router`].
//!
//! Id handling follows the API contract, not the extractor defaults: the
//! `{id}` segment is taken as a raw string and parsed here, so a non-numeric
//! segment behaves like an id that matches nothing (404 for get/update, 204
//! for delete) instead of a 400 rejection. Delete answers 204 whether or not
//! anything was removed.

mod config;
mod error;
mod store;

pub use config::Config;
pub use error::Error;
pub use store::{CreateTodo, Store, Todo, UpdateTodo};

use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::services::{ServeDir, ServeFile};

/// Shared handle to the in-memory store.
pub type Db = Arc<RwLock<Store>>;

/// The API routes, wired to an existing store handle.
pub fn router(db: Db) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

/// API-only application with a fresh empty store and an informational root.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::new()));
    router(db).route("/", get(root))
}

/// Application serving the API plus a prebuilt frontend bundle from `dir`.
///
/// Anything the API does not claim falls back to the bundle, with
/// `index.html` as the not-found document so client-side routes resolve.
pub fn app_with_frontend(dir: &FsPath) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::new()));
    let frontend = ServeDir::new(dir).not_found_service(ServeFile::new(dir.join("index.html")));
    router(db).fallback_service(frontend)
}

/// Serve the application on `listener` until the connection loop ends.
pub async fn run(listener: TcpListener, static_dir: Option<&FsPath>) -> Result<(), std::io::Error> {
    let app = match static_dir {
        Some(dir) => app_with_frontend(dir),
        None => app(),
    };
    axum::serve(listener, app).await
}

async fn root() -> &'static str {
    "todo-server is running; the API lives under /api/todos\n"
}

/// Parse an `{id}` path segment. Only a bare integer matches anything.
fn parse_id(segment: &str) -> Option<u64> {
    segment.parse().ok()
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.create(input);
    tracing::debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Todo>, Error> {
    let id = parse_id(&id).ok_or(Error::NotFound)?;
    let store = db.read().await;
    store.get(id).cloned().map(Json).ok_or(Error::NotFound)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, Error> {
    let id = parse_id(&id).ok_or(Error::NotFound)?;
    let updated = db.write().await.update(id, input).ok_or(Error::NotFound)?;
    tracing::debug!(id, "updated todo");
    Ok(Json(updated))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    if let Some(id) = parse_id(&id) {
        db.write().await.delete(id);
        tracing::debug!(id, "deleted todo");
    }
    StatusCode::NO_CONTENT
}
