//! # Todoapp Architecture
//!
//! Todoapp is a **UI-agnostic to-do list library**. The `todo` binary is one client of it;
//! a GUI, a web handler or a test harness can drive the exact same code.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `todo` crate: CLI + interactive screen)        │
//! │  - Parses input, renders lists, owns stdout/stderr          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the injected repository  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / add / remove, returning structured `CmdResult`s   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `TodoRepository` trait                                   │
//! │  - FileTodoRepository (production), MockTodoRepository      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wiring
//!
//! There is no global repository. [`init::initialize`] builds exactly one
//! repository from a [`config::TodoConfig`] and hands it to a [`api::TodoApi`];
//! the client owns that API value for the lifetime of the process.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Failures come back as [`error::TodoError`]; diagnostics go through
//! `tracing`, and the client decides whether anything listens.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each action
//! - [`store`]: Storage trait, in-memory mock, file-backed store, line codec
//! - [`model`]: The [`model::Todo`] record
//! - [`config`]: Layered configuration
//! - [`init`]: Composition root
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
