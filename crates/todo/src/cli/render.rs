use colored::Colorize;
use todoapp::api::{CmdMessage, DisplayTodo, MessageLevel};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 5;

pub(super) const EMPTY_LIST: &str = "No todos yet. Add one with `todo add <text>`.";

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn render_list(todos: &[DisplayTodo]) -> String {
    if todos.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let mut out = String::new();
    for dt in todos {
        let idx = format!("{:>width$} ", format!("{}.", dt.index), width = INDEX_WIDTH - 1);
        let row: String = dt
            .todo
            .to_string()
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        let available = LINE_WIDTH.saturating_sub(idx.width());
        out.push_str(&format!(
            "{}{}\n",
            idx.yellow(),
            truncate_to_width(&row, available)
        ));
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
