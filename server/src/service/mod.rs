//! Query and mutation operations over lists and todos.
//!
//! # Design
//! Managers own a `DatabaseConnection` handle and acquire a fresh unit of
//! work per call: writes run inside a transaction that is committed only after
//! every statement (including the read-back of the result) succeeded, and is
//! rolled back when dropped on any error path. Payloads are validated before a
//! transaction is opened.

mod lists;
mod todos;

pub use lists::ListManager;
pub use todos::TodoManager;

use todo_core::Todo;

use crate::db::models::TodoRow;
use crate::db::DbResult;

/// Convert rows loaded in creation order, failing on the first bad row.
fn into_todos(rows: Vec<TodoRow>) -> DbResult<Vec<Todo>> {
    rows.into_iter().map(Todo::try_from).collect()
}
