//! List operations.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::SqliteConnection;
use todo_core::{List, ListInput, ListQuery, ListWithTodos, Todo, TodoError, TodoResult};
use uuid::Uuid;

use crate::db::repositories::{ListRepository, TodoRepository};
use crate::db::{DatabaseConnection, DatabaseError, DbResult};
use crate::service::into_todos;

/// Creates, queries, replaces and deletes lists. Each mutation runs in its
/// own transaction.
#[derive(Clone, Debug)]
pub struct ListManager {
    db: DatabaseConnection,
}

impl ListManager {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: ListInput) -> TodoResult<ListWithTodos> {
        input.validate()?;

        let mut tx = self.db.begin().await?;
        let row = ListRepository::insert(&mut tx, Uuid::new_v4(), &input, Utc::now()).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        tracing::info!(list_id = %row.id, "created list");
        Ok(ListWithTodos {
            list: row.into(),
            todos: Vec::new(),
        })
    }

    /// Filter, sort and paginate lists, then attach the todos of each list on
    /// the page.
    pub async fn list(&self, query: &ListQuery) -> TodoResult<Vec<ListWithTodos>> {
        let mut conn = self.db.acquire().await?;
        let lists: Vec<List> = ListRepository::list(&mut conn)
            .await?
            .into_iter()
            .map(List::from)
            .collect();
        let page = query.apply(lists);
        tracing::debug!(returned = page.len(), ?query, "listed lists");

        let ids: Vec<Uuid> = page.iter().map(|list| list.id).collect();
        let mut by_list: HashMap<Uuid, Vec<Todo>> = HashMap::new();
        for todo in into_todos(TodoRepository::list_by_lists(&mut conn, &ids).await?)? {
            by_list.entry(todo.list_id).or_default().push(todo);
        }

        Ok(page
            .into_iter()
            .map(|list| ListWithTodos {
                todos: by_list.remove(&list.id).unwrap_or_default(),
                list,
            })
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> TodoResult<ListWithTodos> {
        let mut conn = self.db.acquire().await?;
        let list = ListRepository::get_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| TodoError::list_not_found(id))?;
        let todos = todos_of(&mut conn, id).await?;
        Ok(ListWithTodos {
            list: list.into(),
            todos,
        })
    }

    /// Replace title and description and bump `updated_at`.
    pub async fn update(&self, id: Uuid, input: ListInput) -> TodoResult<ListWithTodos> {
        input.validate()?;

        let mut tx = self.db.begin().await?;
        let row = ListRepository::update(&mut tx, id, &input, Utc::now())
            .await?
            .ok_or_else(|| TodoError::list_not_found(id))?;
        let todos = todos_of(&mut tx, id).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        tracing::info!(list_id = %id, "updated list");
        Ok(ListWithTodos {
            list: row.into(),
            todos,
        })
    }

    /// Delete a list together with all of its todos.
    pub async fn delete(&self, id: Uuid) -> TodoResult<()> {
        let mut tx = self.db.begin().await?;
        if !ListRepository::exists(&mut tx, id).await? {
            return Err(TodoError::list_not_found(id));
        }
        let removed_todos = TodoRepository::delete_by_list(&mut tx, id).await?;
        ListRepository::delete(&mut tx, id).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        tracing::info!(list_id = %id, removed_todos, "deleted list");
        Ok(())
    }
}

async fn todos_of(conn: &mut SqliteConnection, list_id: Uuid) -> DbResult<Vec<Todo>> {
    into_todos(TodoRepository::list_by_list(conn, list_id).await?)
}
