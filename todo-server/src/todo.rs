use serde::{Deserialize, Serialize};
use todo_store::TodoRow;

/// Wire representation of a todo item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            completed: row.completed,
        }
    }
}

/// Body of `POST /todos`.
#[derive(Debug, Deserialize)]
pub struct NewTodo {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            text: "Buy milk".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["text"], "Buy milk");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn new_todo_rejects_missing_text() {
        let result: Result<NewTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_todo_keeps_text_untrimmed() {
        let input: NewTodo = serde_json::from_str(r#"{"text":"  padded  "}"#).unwrap();
        assert_eq!(input.text, "  padded  ");
    }
}
