//! SQLite persistence: connection pool, migrations, row models and
//! repositories.

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{DatabaseConnection, DatabasePool, UnitOfWork};
pub use error::{DatabaseError, DbResult};
