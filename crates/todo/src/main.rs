//! # Todo CLI
//!
//! The binary is intentionally thin: everything lives in `src/cli/`, and this
//! file only invokes `cli::run()` and turns a failure into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/todoapp/`: UI-agnostic library: model, storage, commands, API
//! - `crates/todo/`: this terminal client
//!
//! Everything the user sees is decided here; everything the list *is* is
//! decided in `todoapp`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
