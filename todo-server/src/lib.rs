mod config;
mod error;
mod routes;
mod todo;

use axum::{routing::get, Router};
use routes::{create_todo, index, list_todos};
use std::sync::{Arc, Mutex};
use todo_store::TodoStore;
use tower_http::cors::{Any, CorsLayer};

pub use config::ServerConfig;
pub use error::ApiError;
pub use todo::{NewTodo, Todo};

/// Shared request-handler state. The store is injected here rather than
/// living in a module-wide singleton, so tests can build an app around an
/// in-memory database.
#[derive(Clone, Debug)]
pub struct AppState {
    todos: Arc<Mutex<TodoStore>>,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self {
            todos: Arc::new(Mutex::new(store)),
        }
    }
}

/// Builds the router: the todo API plus the embedded client page, with CORS
/// open to all origins.
pub fn create_app(store: TodoStore) -> Router {
    let state = AppState::new(store);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/todos", get(list_todos).post(create_todo))
        .layer(cors)
        .with_state(state)
}
