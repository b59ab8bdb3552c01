//! # Composition Root
//!
//! [`initialize`] is the one place a repository gets built. It reads the
//! resolved [`TodoConfig`], constructs either the file-backed store or the
//! seeded in-memory one, and hands it to a [`TodoApi`]. Clients keep the
//! returned [`TodoContext`] for as long as they run; nothing else holds a
//! reference to the store.

use crate::api::TodoApi;
use crate::commands::CmdMessage;
use crate::config::{StorageKind, TodoConfig};
use crate::error::Result;
use crate::store::file::FileTodoRepository;
use crate::store::memory::MockTodoRepository;
use crate::store::TodoRepository;
use std::path::PathBuf;
use tracing::info;

pub struct TodoContext {
    pub api: TodoApi<Box<dyn TodoRepository>>,
    pub config: TodoConfig,
    /// Backing file, `None` for in-memory storage.
    pub data_file: Option<PathBuf>,
    /// Things the user should hear about before the first render.
    pub startup_messages: Vec<CmdMessage>,
}

pub fn initialize(config: TodoConfig) -> Result<TodoContext> {
    let mut startup_messages = Vec::new();

    let (repo, data_file): (Box<dyn TodoRepository>, Option<PathBuf>) = match config.storage {
        StorageKind::Memory => {
            info!("using in-memory todo list");
            startup_messages.push(CmdMessage::info("In-memory list: changes are not saved."));
            (Box::new(MockTodoRepository::new()), None)
        }
        StorageKind::File => {
            let path = config.data_file()?;
            let repo = FileTodoRepository::open_with_policy(&path, config.on_malformed)?;
            for skipped in repo.skipped() {
                startup_messages.push(CmdMessage::warning(format!(
                    "Skipped line {} of {}: {}",
                    skipped.line,
                    path.display(),
                    skipped.reason
                )));
            }
            info!(path = %path.display(), "using todo file");
            (Box::new(repo), Some(path))
        }
    };

    Ok(TodoContext {
        api: TodoApi::new(repo),
        config,
        data_file,
        startup_messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::store::file::LoadPolicy;
    use crate::test_utils::TestEnv;
    use std::fs;

    fn file_config(env: &TestEnv) -> TodoConfig {
        TodoConfig {
            data_dir: Some(env.root.clone()),
            ..Default::default()
        }
    }

    #[test]
    fn memory_storage_is_seeded() {
        let ctx = initialize(TodoConfig {
            storage: StorageKind::Memory,
            ..Default::default()
        })
        .unwrap();
        assert!(ctx.data_file.is_none());
        assert_eq!(ctx.api.list().listed.len(), 2);
        assert_eq!(
            ctx.startup_messages,
            vec![CmdMessage::info("In-memory list: changes are not saved.")]
        );
    }

    #[test]
    fn file_storage_starts_empty_and_persists() {
        let env = TestEnv::new();
        let mut ctx = initialize(file_config(&env)).unwrap();
        assert_eq!(ctx.data_file, Some(env.todo_file()));
        assert!(ctx.api.list().listed.is_empty());
        assert!(ctx.startup_messages.is_empty());

        ctx.api.add("Persist me", None).unwrap();

        let reopened = initialize(file_config(&env)).unwrap();
        assert_eq!(reopened.api.list().listed[0].todo.item, "Persist me");
    }

    #[test]
    fn malformed_file_fails_by_default() {
        let env = TestEnv::new();
        fs::write(env.todo_file(), "garbage\n").unwrap();
        assert!(matches!(
            initialize(file_config(&env)),
            Err(TodoError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn skip_policy_surfaces_warnings() {
        let env = TestEnv::new();
        fs::write(
            env.todo_file(),
            "-1|fine|2024-03-15T12:00:00Z\ngarbage\n",
        )
        .unwrap();

        let ctx = initialize(TodoConfig {
            on_malformed: LoadPolicy::Skip,
            ..file_config(&env)
        })
        .unwrap();

        assert_eq!(ctx.api.list().listed.len(), 1);
        assert_eq!(ctx.startup_messages.len(), 1);
        assert!(ctx.startup_messages[0].content.contains("Skipped line 2"));
    }
}
