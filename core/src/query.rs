//! Filtering, sorting and pagination for the collection endpoints.
//!
//! # Overview
//! `ListQuery` and `TodoQuery` deserialize directly from URL query strings and
//! apply themselves to entities already loaded in creation order:
//! filter, then sort, then paginate.
//!
//! # Design
//! Sorting uses `sort_by`, which is stable, and only the key comparison is
//! reversed for descending order. Entities with equal keys therefore always
//! keep their creation order, in both directions.
//!
//! `due_date` sorts through `Option`'s ordering: todos without a due date come
//! first ascending and last descending.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{List, Priority, Todo};

pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Lenient parse: anything other than `asc` means descending.
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Field todos are sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoSortKey {
    DueDate,
    Priority,
    #[default]
    CreatedAt,
}

/// Offset/limit window applied after sorting. `limit: None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub skip: usize,
    pub limit: Option<usize>,
}

impl Page {
    pub fn apply<T>(self, items: Vec<T>) -> Vec<T> {
        let window = items.into_iter().skip(self.skip);
        match self.limit {
            Some(limit) => window.take(limit).collect(),
            None => window.collect(),
        }
    }
}

/// Lowercased search needle, or `None` when the search term is blank.
fn needle(search: Option<&str>) -> Option<String> {
    search
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

/// Query parameters of `GET /lists/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_list_limit")]
    pub limit: usize,
    /// `asc` or `desc` on `updated_at`. Unrecognized values sort descending.
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
            sort_by: None,
            search: None,
        }
    }
}

impl ListQuery {
    pub fn order(&self) -> SortOrder {
        self.sort_by
            .as_deref()
            .map(SortOrder::from_param)
            .unwrap_or_default()
    }

    pub fn page(&self) -> Page {
        Page {
            skip: self.skip,
            limit: Some(self.limit),
        }
    }

    /// Filter, sort by `updated_at` and paginate `lists`, which must be in
    /// creation order.
    pub fn apply(&self, lists: Vec<List>) -> Vec<List> {
        let needle = needle(self.search.as_deref());
        let mut matched: Vec<List> = match needle {
            Some(needle) => lists
                .into_iter()
                .filter(|l| {
                    contains_ci(Some(&l.title), &needle)
                        || contains_ci(l.description.as_deref(), &needle)
                })
                .collect(),
            None => lists,
        };

        let order = self.order();
        matched.sort_by(|a, b| order.apply(a.updated_at.cmp(&b.updated_at)));
        self.page().apply(matched)
    }
}

/// Query parameters of `GET /todos/`.
///
/// Every filter is optional and filters combine with AND. `completed` is
/// tri-state: absent means no filter, `false` selects incomplete todos.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoQuery {
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: TodoSortKey,
    #[serde(default)]
    pub order: SortOrder,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl TodoQuery {
    pub fn page(&self) -> Page {
        Page {
            skip: self.skip,
            limit: self.limit,
        }
    }

    fn matches(&self, todo: &Todo, needle: Option<&str>) -> bool {
        if self.due_date.is_some_and(|due| todo.due_date != Some(due)) {
            return false;
        }
        if self.priority.is_some_and(|p| todo.priority != p) {
            return false;
        }
        if self.completed.is_some_and(|c| todo.completed != c) {
            return false;
        }
        match needle {
            Some(needle) => {
                contains_ci(Some(&todo.title), needle)
                    || contains_ci(todo.details.as_deref(), needle)
            }
            None => true,
        }
    }

    fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        let ordering = match self.sort_by {
            TodoSortKey::DueDate => a.due_date.cmp(&b.due_date),
            TodoSortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
            TodoSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        self.order.apply(ordering)
    }

    /// Filter, sort and paginate `todos`, which must be in creation order.
    pub fn apply(&self, todos: Vec<Todo>) -> Vec<Todo> {
        let needle = needle(self.search.as_deref());
        let mut matched: Vec<Todo> = todos
            .into_iter()
            .filter(|t| self.matches(t, needle.as_deref()))
            .collect();
        matched.sort_by(|a, b| self.compare(a, b));
        self.page().apply(matched)
    }
}
