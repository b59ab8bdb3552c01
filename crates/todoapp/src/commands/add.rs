use crate::commands::{CmdMessage, CmdResult, DisplayTodo};
use crate::error::Result;
use crate::model::Todo;
use crate::store::TodoRepository;
use chrono::{DateTime, Utc};

/// Append a todo. Text is taken as-is; blank entries are allowed.
pub fn run<R: TodoRepository + ?Sized>(
    repo: &mut R,
    text: String,
    due: Option<DateTime<Utc>>,
) -> Result<CmdResult> {
    let todo = match due {
        Some(due) => Todo::with_due(text, due),
        None => Todo::new(text),
    };
    repo.insert(todo.clone())?;

    let listed = DisplayTodo::enumerate(repo.get_all());
    let mut result = CmdResult::default();
    result.affected.push(DisplayTodo {
        index: listed.len(),
        todo: todo.clone(),
    });
    result.add_message(CmdMessage::success(format!("Added: {}", todo.item)));
    Ok(result.with_listed(listed))
}
