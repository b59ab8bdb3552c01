use crate::commands::{CmdMessage, CmdResult, DisplayTodo};
use crate::error::{Result, TodoError};
use crate::store::TodoRepository;

/// Remove the todo shown at `position` (1-based).
///
/// The entry is looked up in the current snapshot and then deleted by value,
/// so with duplicates it is the first equal entry that goes.
pub fn run<R: TodoRepository + ?Sized>(repo: &mut R, position: usize) -> Result<CmdResult> {
    let all = repo.get_all();
    let todo = position
        .checked_sub(1)
        .and_then(|i| all.get(i))
        .cloned()
        .ok_or(TodoError::IndexOutOfRange {
            index: position,
            len: all.len(),
        })?;
    // The entry that actually goes; only differs from `position` with duplicates.
    let removed_at = all.iter().position(|t| *t == todo).map_or(position, |i| i + 1);

    repo.delete(&todo)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Removed: {}", todo.item)));
    result.affected.push(DisplayTodo {
        index: removed_at,
        todo,
    });
    Ok(result.with_listed(DisplayTodo::enumerate(repo.get_all())))
}
