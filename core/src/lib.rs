//! Domain core for the todo lists service.
//!
//! # Overview
//! Storage-agnostic entities (`List`, `Todo`), their write payloads, the
//! validation rules applied before any write, the error taxonomy every
//! operation reports through, and the query engine behind the collection
//! endpoints.
//!
//! # Design
//! - Nothing here touches a database or the network; the server crate loads
//!   rows, converts them into these types and hands them to `ListQuery` /
//!   `TodoQuery`.
//! - `Priority`, `TodoSortKey` and `SortOrder` are the single definitions
//!   shared by payload validation and sorting.

pub mod error;
pub mod query;
pub mod types;
pub mod validate;

pub use error::{Entity, TodoError, TodoResult};
pub use query::{ListQuery, Page, SortOrder, TodoQuery, TodoSortKey, DEFAULT_LIST_LIMIT};
pub use types::{List, ListInput, ListWithTodos, Priority, Todo, TodoInput};
pub use validate::{validate_title, TITLE_MAX_CHARS};
