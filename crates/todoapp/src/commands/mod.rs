//! # Command Layer
//!
//! The business logic behind each user action. Every command is a plain `run`
//! function over a [`TodoRepository`] that returns a [`CmdResult`].
//!
//! Commands never print, prompt or exit. They return the todos a client should
//! show and a list of leveled messages; how those look is the client's business.
//!
//! Positions handed to and returned from commands are **1-based** and always
//! refer to the repository's current snapshot.
//!
//! ## Command Modules
//!
//! - [`list`]: Everything, in order
//! - [`add`]: Append a new todo
//! - [`remove`]: Delete the todo at a position
//!
//! [`TodoRepository`]: crate::store::TodoRepository

use crate::model::Todo;
use serde::Serialize;

pub mod add;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A todo paired with its 1-based position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTodo {
    pub index: usize,
    pub todo: Todo,
}

impl DisplayTodo {
    /// Number a snapshot in order, starting at 1.
    pub fn enumerate(todos: Vec<Todo>) -> Vec<DisplayTodo> {
        todos
            .into_iter()
            .enumerate()
            .map(|(i, todo)| DisplayTodo { index: i + 1, todo })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Todos the command changed, with the position they had (or now have).
    pub affected: Vec<DisplayTodo>,
    /// The list to show after the command.
    pub listed: Vec<DisplayTodo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, todos: Vec<DisplayTodo>) -> Self {
        self.listed = todos;
        self
    }
}
