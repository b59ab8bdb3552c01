//! The interactive single screen.
//!
//! Shows the list, then reads one action per line from stdin. Every action that
//! changes the list is followed by a full redraw.
//!
//! ```text
//! add <text>     append a todo (alias: a)
//! rm <n>         remove the todo at position n (alias: remove, d)
//! list           redraw (alias: l)
//! help           show this help (alias: h, ?)
//! quit           leave (alias: q, exit)
//! ```

use super::render::{render_list, render_messages};
use colored::Colorize;
use std::io::{BufRead, Write};
use todoapp::api::{CmdMessage, TodoApi};
use todoapp::commands::CmdResult;
use todoapp::error::{Result, TodoError};
use todoapp::store::TodoRepository;

const PROMPT: &str = "> ";

const HELP: &str = "\
add <text>   add a todo
rm <n>       remove the todo at position n
list         redraw the list
quit         leave";

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Quit,
}

pub(super) struct Screen<'a, R: TodoRepository, W: Write> {
    api: &'a mut TodoApi<R>,
    out: W,
}

impl<'a, R: TodoRepository, W: Write> Screen<'a, R, W> {
    pub(super) fn new(api: &'a mut TodoApi<R>, out: W) -> Self {
        Self { api, out }
    }

    pub(super) fn run<B: BufRead>(&mut self, input: B) -> Result<()> {
        self.refresh()?;
        self.prompt()?;
        for line in input.lines() {
            if self.handle(&line?)? == Flow::Quit {
                break;
            }
            self.prompt()?;
        }
        Ok(())
    }

    /// Apply one line of input. Only output failures are returned as errors;
    /// a failed add or remove is shown on screen and the loop goes on.
    pub(super) fn handle(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        let (action, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        match action {
            "" => {}
            "q" | "quit" | "exit" => return Ok(Flow::Quit),
            "l" | "list" => self.refresh()?,
            "h" | "help" | "?" => writeln!(self.out, "{}", HELP)?,
            "a" | "add" => {
                let outcome = self.api.add(rest.trim(), None);
                self.show(outcome)?;
            }
            "rm" | "remove" | "d" => match rest.trim().parse::<usize>() {
                Ok(position) => {
                    let outcome = self.api.remove(position);
                    self.show(outcome)?;
                }
                Err(_) => self.message(CmdMessage::warning(format!(
                    "Expected a position, got '{}'",
                    rest.trim()
                )))?,
            },
            other => self.message(CmdMessage::warning(format!(
                "Unknown action '{}'. Type 'help' for the list.",
                other
            )))?,
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        match outcome {
            Ok(result) => {
                write!(self.out, "{}", render_messages(&result.messages))?;
                write!(self.out, "{}", render_list(&result.listed))?;
            }
            Err(e) => {
                let mut text = format!("Error: {}", e);
                if e.is_retryable() {
                    text.push_str(" (nothing changed, try again)");
                }
                self.message(CmdMessage::error(text))?;
            }
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        let result = self.api.list();
        write!(self.out, "{}", render_list(&result.listed))?;
        Ok(())
    }

    fn message(&mut self, message: CmdMessage) -> Result<()> {
        write!(self.out, "{}", render_messages(&[message]))?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{}", PROMPT.bold())?;
        self.out.flush().map_err(TodoError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use todoapp::store::memory::MockTodoRepository;

    fn items(api: &TodoApi<MockTodoRepository>) -> Vec<String> {
        api.repository()
            .get_all()
            .into_iter()
            .map(|t| t.item)
            .collect()
    }

    fn session(input: &str) -> (TodoApi<MockTodoRepository>, String) {
        colored::control::set_override(false);
        let mut api = TodoApi::new(MockTodoRepository::new());
        let mut out = Vec::new();
        Screen::new(&mut api, &mut out)
            .run(Cursor::new(input.to_string()))
            .unwrap();
        (api, String::from_utf8(out).unwrap())
    }

    #[test]
    fn first_render_shows_seeded_list() {
        let (_, out) = session("quit\n");
        assert!(out.contains("1. -1: Eat lunch"));
        assert!(out.contains("2. -1: Eat Halloween candy"));
    }

    #[test]
    fn add_and_remove_then_redraw() {
        let (api, out) = session("add Buy milk\nrm 1\nq\n");
        assert_eq!(items(&api), vec!["Eat Halloween candy", "Buy milk"]);
        assert!(out.contains("Added: Buy milk"));
        assert!(out.contains("Removed: Eat lunch"));
        assert!(out.contains("1. -1: Eat Halloween candy"));
    }

    #[test]
    fn tab_separates_action_from_text() {
        let (api, out) = session("add\tBuy milk\nrm\t1\n");
        assert_eq!(items(&api), vec!["Eat Halloween candy", "Buy milk"]);
        assert!(!out.contains("Unknown action"));
    }

    #[test]
    fn lines_after_quit_are_ignored() {
        let (api, _) = session("q\nadd never\n");
        assert_eq!(items(&api).len(), 2);
    }

    #[test]
    fn end_of_input_ends_session() {
        let (api, _) = session("add last one");
        assert_eq!(items(&api).last().unwrap(), "last one");
    }

    #[test]
    fn bad_position_keeps_going() {
        let (api, out) = session("rm 9\nrm two\nadd still here\n");
        assert!(out.contains("No todo at position 9"));
        assert!(out.contains("Expected a position, got 'two'"));
        assert_eq!(items(&api).len(), 3);
    }

    #[test]
    fn unknown_action_is_reported() {
        colored::control::set_override(false);
        let mut api = TodoApi::new(MockTodoRepository::new());
        let mut out = Vec::new();
        let flow = Screen::new(&mut api, &mut out).handle("frobnicate").unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(String::from_utf8(out).unwrap().contains("Unknown action 'frobnicate'"));
    }
}
