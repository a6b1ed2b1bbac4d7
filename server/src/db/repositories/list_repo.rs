//! List repository for database operations

use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;
use todo_core::ListInput;
use uuid::Uuid;

use crate::db::error::DbResult;
use crate::db::models::ListRow;

/// List repository. Every method runs on a borrowed connection so callers
/// decide whether it executes inside a transaction.
pub struct ListRepository;

impl ListRepository {
    pub async fn insert(
        conn: &mut SqliteConnection,
        id: Uuid,
        input: &ListInput,
        now: DateTime<Utc>,
    ) -> DbResult<ListRow> {
        let row = sqlx::query_as::<_, ListRow>(
            "INSERT INTO lists (id, title, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(id)
        .bind(&input.title)
        .bind(input.description.as_deref())
        .bind(now)
        .bind(now)
        .fetch_one(&mut *conn)
        .await?;
        Ok(row)
    }

    pub async fn get_by_id(conn: &mut SqliteConnection, id: Uuid) -> DbResult<Option<ListRow>> {
        let row = sqlx::query_as::<_, ListRow>("SELECT * FROM lists WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    pub async fn exists(conn: &mut SqliteConnection, id: Uuid) -> DbResult<bool> {
        let (found,): (i64,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM lists WHERE id = ?)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(found != 0)
    }

    /// All lists in creation order.
    pub async fn list(conn: &mut SqliteConnection) -> DbResult<Vec<ListRow>> {
        let rows = sqlx::query_as::<_, ListRow>("SELECT * FROM lists ORDER BY rowid")
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Replace title and description. `None` if no such list.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: Uuid,
        input: &ListInput,
        now: DateTime<Utc>,
    ) -> DbResult<Option<ListRow>> {
        let row = sqlx::query_as::<_, ListRow>(
            "UPDATE lists SET title = ?, description = ?, updated_at = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&input.title)
        .bind(input.description.as_deref())
        .bind(now)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Returns the number of deleted rows.
    pub async fn delete(conn: &mut SqliteConnection, id: Uuid) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM lists WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
