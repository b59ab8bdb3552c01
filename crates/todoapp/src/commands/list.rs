use crate::commands::{CmdResult, DisplayTodo};
use crate::store::TodoRepository;

pub fn run<R: TodoRepository + ?Sized>(repo: &R) -> CmdResult {
    CmdResult::default().with_listed(DisplayTodo::enumerate(repo.get_all()))
}
