//! Error taxonomy shared by every list and todo operation.
//!
//! # Design
//! `NotFound` and `Referential` are kept apart because they surface with
//! different statuses: a missing entity addressed by id is a 404, while a
//! todo payload pointing at a missing list is a malformed request (400).
//! `Store` carries only a message; the storage error itself stays in the
//! server crate so this crate has no database dependency.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// The kind of entity an operation addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    List,
    Todo,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::List => f.write_str("List"),
            Entity::Todo => f.write_str("Todo"),
        }
    }
}

/// Errors returned by list and todo operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// A field failed validation, e.g. an empty title.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The addressed entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: Entity, id: Uuid },

    /// A todo payload references a list that does not exist.
    #[error("referenced list {list_id} does not exist")]
    Referential { list_id: Uuid },

    /// The underlying store failed; the transaction was rolled back.
    #[error("store error: {0}")]
    Store(String),
}

impl TodoError {
    pub fn validation(msg: impl Into<String>) -> Self {
        TodoError::Validation(msg.into())
    }

    pub fn list_not_found(id: Uuid) -> Self {
        TodoError::NotFound {
            entity: Entity::List,
            id,
        }
    }

    pub fn todo_not_found(id: Uuid) -> Self {
        TodoError::NotFound {
            entity: Entity::Todo,
            id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound { .. })
    }
}

pub type TodoResult<T> = Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = TodoError::list_not_found(Uuid::nil());
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "List with id 00000000-0000-0000-0000-000000000000 not found"
        );
    }

    #[test]
    fn referential_is_not_a_not_found() {
        let err = TodoError::Referential {
            list_id: Uuid::nil(),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("does not exist"));
    }
}
