//! Repositories over the `lists` and `todos` tables.

pub mod list_repo;
pub mod todo_repo;

pub use list_repo::ListRepository;
pub use todo_repo::TodoRepository;
