//! Todo repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use todo_core::TodoInput;
use uuid::Uuid;

use crate::db::error::DbResult;
use crate::db::models::TodoRow;

/// Bound parameters per `IN (...)` query, well under SQLite's variable limit.
const IN_CHUNK: usize = 500;

pub struct TodoRepository;

impl TodoRepository {
    pub async fn insert(
        conn: &mut SqliteConnection,
        id: Uuid,
        input: &TodoInput,
        now: DateTime<Utc>,
    ) -> DbResult<TodoRow> {
        let row = sqlx::query_as::<_, TodoRow>(
            "INSERT INTO todos (id, title, details, completed, created_at, due_date, priority, list_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(id)
        .bind(&input.title)
        .bind(input.details.as_deref())
        .bind(input.completed)
        .bind(now)
        .bind(input.due_date)
        .bind(input.priority.as_str())
        .bind(input.list_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(row)
    }

    pub async fn get_by_id(conn: &mut SqliteConnection, id: Uuid) -> DbResult<Option<TodoRow>> {
        let row = sqlx::query_as::<_, TodoRow>("SELECT * FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// All todos in creation order.
    pub async fn list(conn: &mut SqliteConnection) -> DbResult<Vec<TodoRow>> {
        let rows = sqlx::query_as::<_, TodoRow>("SELECT * FROM todos ORDER BY rowid")
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Todos of one list in creation order.
    pub async fn list_by_list(conn: &mut SqliteConnection, list_id: Uuid) -> DbResult<Vec<TodoRow>> {
        let rows =
            sqlx::query_as::<_, TodoRow>("SELECT * FROM todos WHERE list_id = ? ORDER BY rowid")
                .bind(list_id)
                .fetch_all(&mut *conn)
                .await?;
        Ok(rows)
    }

    /// Todos belonging to any of `list_ids`. Rows of one list keep their
    /// creation order; rows of different lists may come from different chunks.
    pub async fn list_by_lists(
        conn: &mut SqliteConnection,
        list_ids: &[Uuid],
    ) -> DbResult<Vec<TodoRow>> {
        let mut rows = Vec::new();
        for chunk in list_ids.chunks(IN_CHUNK) {
            let mut builder = QueryBuilder::<Sqlite>::new("SELECT * FROM todos WHERE list_id IN (");
            let mut ids = builder.separated(", ");
            for id in chunk {
                ids.push_bind(*id);
            }
            ids.push_unseparated(") ORDER BY rowid");
            rows.extend(
                builder
                    .build_query_as::<TodoRow>()
                    .fetch_all(&mut *conn)
                    .await?,
            );
        }
        Ok(rows)
    }

    /// Replace every writable field. `created_at` is left untouched.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: Uuid,
        input: &TodoInput,
    ) -> DbResult<Option<TodoRow>> {
        let row = sqlx::query_as::<_, TodoRow>(
            "UPDATE todos
             SET title = ?, details = ?, completed = ?, due_date = ?, priority = ?, list_id = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&input.title)
        .bind(input.details.as_deref())
        .bind(input.completed)
        .bind(input.due_date)
        .bind(input.priority.as_str())
        .bind(input.list_id)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Flip `completed` in a single statement.
    pub async fn toggle_completed(conn: &mut SqliteConnection, id: Uuid) -> DbResult<Option<TodoRow>> {
        let row = sqlx::query_as::<_, TodoRow>(
            "UPDATE todos SET completed = NOT completed WHERE id = ? RETURNING *",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(row)
    }

    pub async fn delete(conn: &mut SqliteConnection, id: Uuid) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_by_list(conn: &mut SqliteConnection, list_id: Uuid) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM todos WHERE list_id = ?")
            .bind(list_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
