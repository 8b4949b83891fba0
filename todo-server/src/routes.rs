use axum::{extract::State, response::Html, Json};

use crate::{
    error::ApiError,
    todo::{NewTodo, Todo},
    AppState,
};

const INDEX_PAGE: &str = include_str!("index.html");

/// Serves the client page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// `GET /todos` — the full collection, ascending by id.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let store = state.todos.lock().unwrap();
    let todos = store.list_todos()?.into_iter().map(Todo::from).collect();
    Ok(Json(todos))
}

/// `POST /todos` — inserts the given text and returns the row as persisted.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<NewTodo>,
) -> Result<Json<Todo>, ApiError> {
    let store = state.todos.lock().unwrap();
    let row = store.insert_todo(&input.text)?;
    Ok(Json(Todo::from(row)))
}
