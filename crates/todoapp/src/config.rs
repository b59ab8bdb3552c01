//! # Configuration
//!
//! Configuration is loaded with [`confique`] from layered sources.
//!
//! ## Priority
//!
//! 1. **Environment variables**: `TODO_DATA_DIR`, `TODO_STORAGE`, etc.
//! 2. **Config file**: `todo.toml` in the OS config directory (via `directories`),
//!    or an explicit path.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `data_dir` | `TODO_DATA_DIR` | OS data directory | Where the todo file lives |
//! | `file_name` | `TODO_FILE_NAME` | `todo.txt` | Name of the todo file |
//! | `storage` | `TODO_STORAGE` | `file` | `file`, or `memory` for the seeded demo list |
//! | `on_malformed` | `TODO_ON_MALFORMED` | `fail` | `fail` or `skip` bad lines on load |
//! | `log_level` | `TODO_LOG_LEVEL` | `warn` | Default log filter |

use crate::error::{Result, TodoError, UnknownSetting};
use crate::store::file::LoadPolicy;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE_NAME: &str = "todo.toml";

/// Which repository backs the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    File,
    Memory,
}

impl FromStr for StorageKind {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageKind::File),
            "memory" => Ok(StorageKind::Memory),
            other => Err(UnknownSetting {
                setting: "storage",
                value: other.to_string(),
                expected: "file|memory",
            }),
        }
    }
}

impl<'de> Deserialize<'de> for StorageKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::File => write!(f, "file"),
            StorageKind::Memory => write!(f, "memory"),
        }
    }
}

fn parse_storage(s: &str) -> std::result::Result<StorageKind, UnknownSetting> {
    s.parse()
}

fn parse_load_policy(s: &str) -> std::result::Result<LoadPolicy, UnknownSetting> {
    s.parse()
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Directory holding the todo file. When absent, the OS data directory is used.
    #[config(env = "TODO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[config(env = "TODO_FILE_NAME", default = "todo.txt")]
    pub file_name: String,

    #[config(env = "TODO_STORAGE", default = "file", parse_env = parse_storage)]
    pub storage: StorageKind,

    #[config(env = "TODO_ON_MALFORMED", default = "fail", parse_env = parse_load_policy)]
    pub on_malformed: LoadPolicy,

    #[config(env = "TODO_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            file_name: "todo.txt".to_string(),
            storage: StorageKind::File,
            on_malformed: LoadPolicy::Fail,
            log_level: "warn".to_string(),
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "todolist", "todo")
}

impl TodoConfig {
    /// Load from the environment and `file` (missing files are ignored).
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Load from the environment and a file the user named explicitly, which
    /// must exist.
    pub fn load_required(file: &Path) -> Result<Self> {
        if !file.is_file() {
            return Err(TodoError::Config(format!(
                "Config file not found: {}",
                file.display()
            )));
        }
        Self::load(Some(file))
    }

    /// `todo.toml` in the OS config directory.
    pub fn default_file() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| TodoError::Config("Could not determine data directory".into())),
        }
    }

    pub fn data_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.file_name))
    }

    /// Resolved settings as `(key, value)` pairs, in table order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let data_dir = self
            .data_dir()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|e| format!("<{}>", e));
        vec![
            ("data_dir", data_dir),
            ("file_name", self.file_name.clone()),
            ("storage", self.storage.to_string()),
            ("on_malformed", self.on_malformed.to_string()),
            ("log_level", self.log_level.clone()),
        ]
    }
}
