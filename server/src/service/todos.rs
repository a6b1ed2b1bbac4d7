//! Todo operations.

use chrono::Utc;
use todo_core::{Todo, TodoError, TodoInput, TodoQuery, TodoResult};
use uuid::Uuid;

use crate::db::repositories::{ListRepository, TodoRepository};
use crate::db::{DatabaseConnection, DatabaseError};
use crate::service::into_todos;

/// Creates, queries, replaces, toggles and deletes todos.
#[derive(Clone, Debug)]
pub struct TodoManager {
    db: DatabaseConnection,
}

impl TodoManager {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The referenced list is checked inside the same transaction as the
    /// insert, so it cannot disappear in between.
    pub async fn create(&self, input: TodoInput) -> TodoResult<Todo> {
        input.validate()?;

        let mut tx = self.db.begin().await?;
        if !ListRepository::exists(&mut tx, input.list_id).await? {
            return Err(TodoError::Referential {
                list_id: input.list_id,
            });
        }
        let row = TodoRepository::insert(&mut tx, Uuid::new_v4(), &input, Utc::now()).await?;
        let todo = Todo::try_from(row)?;
        tx.commit().await.map_err(DatabaseError::from)?;

        tracing::info!(todo_id = %todo.id, list_id = %todo.list_id, "created todo");
        Ok(todo)
    }

    pub async fn list(&self, query: &TodoQuery) -> TodoResult<Vec<Todo>> {
        let mut conn = self.db.acquire().await?;
        let todos = into_todos(TodoRepository::list(&mut conn).await?)?;
        let page = query.apply(todos);
        tracing::debug!(returned = page.len(), ?query, "listed todos");
        Ok(page)
    }

    /// Same as `list`, restricted to one existing list.
    pub async fn list_for_list(&self, list_id: Uuid, query: &TodoQuery) -> TodoResult<Vec<Todo>> {
        let mut conn = self.db.acquire().await?;
        if !ListRepository::exists(&mut conn, list_id).await? {
            return Err(TodoError::list_not_found(list_id));
        }
        let todos = into_todos(TodoRepository::list_by_list(&mut conn, list_id).await?)?;
        Ok(query.apply(todos))
    }

    pub async fn get(&self, id: Uuid) -> TodoResult<Todo> {
        let mut conn = self.db.acquire().await?;
        let row = TodoRepository::get_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| TodoError::todo_not_found(id))?;
        Ok(Todo::try_from(row)?)
    }

    /// Replace every field of a todo. A missing target list is reported
    /// before a missing todo.
    pub async fn update(&self, id: Uuid, input: TodoInput) -> TodoResult<Todo> {
        input.validate()?;

        let mut tx = self.db.begin().await?;
        if !ListRepository::exists(&mut tx, input.list_id).await? {
            return Err(TodoError::list_not_found(input.list_id));
        }
        let row = TodoRepository::update(&mut tx, id, &input)
            .await?
            .ok_or_else(|| TodoError::todo_not_found(id))?;
        let todo = Todo::try_from(row)?;
        tx.commit().await.map_err(DatabaseError::from)?;

        tracing::info!(todo_id = %id, "updated todo");
        Ok(todo)
    }

    pub async fn toggle_completed(&self, id: Uuid) -> TodoResult<Todo> {
        let mut tx = self.db.begin().await?;
        let row = TodoRepository::toggle_completed(&mut tx, id)
            .await?
            .ok_or_else(|| TodoError::todo_not_found(id))?;
        let todo = Todo::try_from(row)?;
        tx.commit().await.map_err(DatabaseError::from)?;

        tracing::info!(todo_id = %id, completed = todo.completed, "toggled todo");
        Ok(todo)
    }

    pub async fn delete(&self, id: Uuid) -> TodoResult<()> {
        let mut tx = self.db.begin().await?;
        if TodoRepository::delete(&mut tx, id).await? == 0 {
            return Err(TodoError::todo_not_found(id));
        }
        tx.commit().await.map_err(DatabaseError::from)?;

        tracing::info!(todo_id = %id, "deleted todo");
        Ok(())
    }
}
