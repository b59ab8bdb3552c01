//! # Storage Layer
//!
//! The [`TodoRepository`] trait is the whole storage capability: list, insert,
//! delete. There is no update; changing an entry means deleting it and inserting
//! a new one.
//!
//! ## Contract
//!
//! - `get_all` returns an owned snapshot in insertion order. Callers never hold
//!   a live view into the store, so a snapshot taken before a mutation stays
//!   exactly as it was.
//! - `insert` appends, then persists.
//! - `delete` removes the **first** value-equal entry, then persists. Deleting
//!   something that is not there is a no-op and reports `Ok(false)`.
//! - A failed persist returns an error and leaves the in-memory list as it was
//!   before the call.
//!
//! ## Implementations
//!
//! - [`memory::MockTodoRepository`]: in-memory, seeded with two entries.
//! - [`file::FileTodoRepository`]: one plain text file, rewritten on every
//!   mutation. The line format lives in [`record`].
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! └── todo.txt        # id|text|dueDate, one todo per line
//! ```

use crate::error::Result;
use crate::model::Todo;

pub mod file;
pub mod memory;
pub mod record;

/// Abstract interface for todo storage.
pub trait TodoRepository {
    /// All todos, in insertion order.
    fn get_all(&self) -> Vec<Todo>;

    /// Append a todo.
    fn insert(&mut self, todo: Todo) -> Result<()>;

    /// Remove the first todo equal to `todo`. Returns whether anything was removed.
    fn delete(&mut self, todo: &Todo) -> Result<bool>;
}

impl<R: TodoRepository + ?Sized> TodoRepository for Box<R> {
    fn get_all(&self) -> Vec<Todo> {
        (**self).get_all()
    }

    fn insert(&mut self, todo: Todo) -> Result<()> {
        (**self).insert(todo)
    }

    fn delete(&mut self, todo: &Todo) -> Result<bool> {
        (**self).delete(todo)
    }
}
