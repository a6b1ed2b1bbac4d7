//! Row types for the `lists` and `todos` tables and their conversion into
//! domain entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use todo_core::{List, Priority, Todo};
use uuid::Uuid;

use crate::db::error::DatabaseError;

#[derive(Debug, Clone, FromRow)]
pub struct ListRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ListRow> for List {
    fn from(row: ListRow) -> Self {
        List {
            id: row.id,
            title: row.title,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// `priority` stays a string here; the CHECK constraint keeps it to the
/// three known names, and anything else is reported as a type error.
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub id: Uuid,
    pub title: String,
    pub details: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: String,
    pub list_id: Uuid,
}

impl TryFrom<TodoRow> for Todo {
    type Error = DatabaseError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        let priority: Priority = row
            .priority
            .parse()
            .map_err(|_| DatabaseError::type_error(format!("unknown priority {:?}", row.priority)))?;

        Ok(Todo {
            id: row.id,
            title: row.title,
            details: row.details,
            completed: row.completed,
            created_at: row.created_at,
            due_date: row.due_date,
            priority,
            list_id: row.list_id,
        })
    }
}
