//! # API Facade
//!
//! The single entry point a client talks to. [`TodoApi`] owns the repository it
//! was constructed with and forwards each call to the matching command.
//!
//! The facade holds no business logic and does no I/O. It exists so a client
//! depends on one type, and so the storage backend is chosen exactly once, by
//! whoever builds the API:
//!
//! - Production: `TodoApi<Box<dyn TodoRepository>>` from [`crate::init::initialize`]
//! - Tests: `TodoApi<MockTodoRepository>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::TodoRepository;
use chrono::{DateTime, Utc};

pub struct TodoApi<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoApi<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.repo)
    }

    pub fn add(
        &mut self,
        text: impl Into<String>,
        due: Option<DateTime<Utc>>,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.repo, text.into(), due)
    }

    pub fn remove(&mut self, position: usize) -> Result<CmdResult> {
        commands::remove::run(&mut self.repo, position)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

pub use crate::commands::{CmdMessage, DisplayTodo, MessageLevel};
