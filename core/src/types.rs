//! Domain entities and write payloads for todo lists.
//!
//! # Design
//! These types are storage-agnostic: the server crate maps its SQLite rows
//! into them and serializes them straight to JSON. Write payloads carry the
//! full field set because updates replace every field (PUT semantics), so the
//! same payload type serves both create and update.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TodoError;

/// Urgency of a todo. Stored and serialized as `low` / `medium` / `high`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort rank: high = 3, medium = 2, low = 1.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(TodoError::validation(format!(
                "priority must be one of low, medium, high (got {other:?})"
            ))),
        }
    }
}

/// A todo list without its todos (the list projection).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct List {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A list together with the todos that belong to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListWithTodos {
    #[serde(flatten)]
    pub list: List,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub details: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub list_id: Uuid,
}

/// Payload for creating or replacing a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for creating or replacing a todo. Omitted optional fields take
/// their defaults, also on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    pub title: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    pub list_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_rank_orders_high_above_low() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn priority_parses_lowercase_names() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert!(matches!(
            "HIGH".parse::<Priority>(),
            Err(TodoError::Validation(_))
        ));
    }

    #[test]
    fn todo_input_applies_defaults() {
        let input: TodoInput = serde_json::from_str(
            r#"{"title":"Walk dog","list_id":"00000000-0000-0000-0000-000000000001"}"#,
        )
        .unwrap();
        assert!(!input.completed);
        assert_eq!(input.priority, Priority::Medium);
        assert!(input.due_date.is_none());
        assert!(input.details.is_none());
    }

    #[test]
    fn todo_input_rejects_missing_list_id() {
        let result: Result<TodoInput, _> = serde_json::from_str(r#"{"title":"Orphan"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn todo_input_rejects_unknown_priority() {
        let result: Result<TodoInput, _> = serde_json::from_str(
            r#"{"title":"x","priority":"urgent","list_id":"00000000-0000-0000-0000-000000000001"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn list_with_todos_serializes_flat() {
        let list = ListWithTodos {
            list: List {
                id: Uuid::nil(),
                title: "Groceries".to_string(),
                description: None,
                created_at: DateTime::<Utc>::UNIX_EPOCH,
                updated_at: DateTime::<Utc>::UNIX_EPOCH,
            },
            todos: Vec::new(),
        };
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["title"], "Groceries");
        assert!(json["description"].is_null());
        assert_eq!(json["todos"], serde_json::json!([]));
    }

    #[test]
    fn todo_serializes_priority_lowercase() {
        let todo = Todo {
            id: Uuid::nil(),
            title: "Test".to_string(),
            details: None,
            completed: false,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            due_date: None,
            priority: Priority::High,
            list_id: Uuid::nil(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["priority"], "high");
        assert_eq!(json["completed"], false);
        assert!(json["due_date"].is_null());
    }
}
