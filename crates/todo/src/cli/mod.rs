//! # CLI Behavior
//!
//! This is **one possible UI client** for todoapp. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`todo`)
//!
//! Running `todo` with no arguments lists the todos. Reading the list is what
//! the tool is for most of the time.
//!
//! ## One-shot and Interactive Use
//!
//! - `todo add <text>` / `todo remove <n>` change the list and print it again.
//! - `todo screen` keeps a single screen open on stdin: type `add <text>` to add,
//!   `rm <n>` to remove, and the list is redrawn after every change.
//!
//! ## Wiring
//!
//! `commands::run` loads the configuration, applies the global flags
//! (`--data-dir`, `--memory`), installs logging, and builds the one repository
//! through `todoapp::init::initialize`. Handlers receive the API explicitly.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, dispatch, per-command handlers
//! - `logging`: tracing subscriber setup
//! - `render`: List and message formatting
//! - `screen`: The interactive single-screen loop
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod render;
mod screen;
pub mod setup;

pub use commands::run;
