//! Write-side validation for list and todo payloads.
//!
//! Runs before any store access, so a rejected payload never opens a
//! transaction.

use crate::error::{TodoError, TodoResult};
use crate::types::{ListInput, TodoInput};

pub const TITLE_MAX_CHARS: usize = 100;

/// Titles must hold between 1 and 100 characters (not bytes).
pub fn validate_title(title: &str) -> TodoResult<()> {
    let len = title.chars().count();
    if len == 0 {
        return Err(TodoError::validation("title must not be empty"));
    }
    if len > TITLE_MAX_CHARS {
        return Err(TodoError::validation(format!(
            "title must be at most {TITLE_MAX_CHARS} characters (got {len})"
        )));
    }
    Ok(())
}

impl ListInput {
    pub fn validate(&self) -> TodoResult<()> {
        validate_title(&self.title)
    }
}

impl TodoInput {
    pub fn validate(&self) -> TodoResult<()> {
        validate_title(&self.title)
    }
}
