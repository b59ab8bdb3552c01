use super::record::{check_storable, decode_line, encode_line};
use super::TodoRepository;
use crate::error::{RecordError, Result, TodoError, UnknownSetting};
use crate::model::Todo;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// What to do with a line that cannot be decoded while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Refuse to open the file.
    #[default]
    Fail,
    /// Drop the line, keep it in [`FileTodoRepository::skipped`] and log a warning.
    Skip,
}

impl FromStr for LoadPolicy {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(LoadPolicy::Fail),
            "skip" => Ok(LoadPolicy::Skip),
            other => Err(UnknownSetting {
                setting: "load policy",
                value: other.to_string(),
                expected: "fail|skip",
            }),
        }
    }
}

impl<'de> Deserialize<'de> for LoadPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadPolicy::Fail => write!(f, "fail"),
            LoadPolicy::Skip => write!(f, "skip"),
        }
    }
}

/// A line dropped under [`LoadPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    pub reason: RecordError,
}

/// Todos kept in a single plain text file.
///
/// The file is read once, when the repository is opened. After that the
/// in-memory list is the source of truth and every mutation rewrites the whole
/// file through a temporary file and a rename, so a crash mid-write leaves the
/// previous version intact.
pub struct FileTodoRepository {
    path: PathBuf,
    items: Vec<Todo>,
    skipped: Vec<SkippedLine>,
}

impl FileTodoRepository {
    /// Open with [`LoadPolicy::Fail`]. A missing file is an empty list.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_policy(path, LoadPolicy::Fail)
    }

    pub fn open_with_policy(path: impl Into<PathBuf>, policy: LoadPolicy) -> Result<Self> {
        let path = path.into();
        let (items, skipped) = load(&path, policy)?;
        debug!(
            path = %path.display(),
            count = items.len(),
            skipped = skipped.len(),
            "loaded todos"
        );
        Ok(Self {
            path,
            items,
            skipped,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines dropped while loading. Always empty under [`LoadPolicy::Fail`].
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    fn write_error(&self, source: io::Error) -> TodoError {
        TodoError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn persist(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.write_error(e))?;

        let mut content = String::new();
        for todo in &self.items {
            content.push_str(&encode_line(todo));
            content.push('\n');
        }

        let tmp_path = dir.join(format!(".todo-{}.tmp", Uuid::new_v4()));
        let written = write_synced(&tmp_path, content.as_bytes())
            .and_then(|_| fs::rename(&tmp_path, &self.path));
        if let Err(source) = written {
            let _ = fs::remove_file(&tmp_path);
            error!(path = %self.path.display(), error = %source, "failed to write todos");
            return Err(self.write_error(source));
        }

        debug!(path = %self.path.display(), count = self.items.len(), "wrote todos");
        Ok(())
    }
}

impl TodoRepository for FileTodoRepository {
    fn get_all(&self) -> Vec<Todo> {
        self.items.clone()
    }

    fn insert(&mut self, todo: Todo) -> Result<()> {
        check_storable(&todo).map_err(TodoError::Unstorable)?;
        self.items.push(todo);
        if let Err(e) = self.persist() {
            self.items.pop();
            return Err(e);
        }
        Ok(())
    }

    fn delete(&mut self, todo: &Todo) -> Result<bool> {
        let Some(pos) = self.items.iter().position(|t| t == todo) else {
            return Ok(false);
        };
        let removed = self.items.remove(pos);
        if let Err(e) = self.persist() {
            self.items.insert(pos, removed);
            return Err(e);
        }
        Ok(true)
    }
}

fn load(path: &Path, policy: LoadPolicy) -> Result<(Vec<Todo>, Vec<SkippedLine>)> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no todo file yet, starting empty");
            return Ok((Vec::new(), Vec::new()));
        }
        Err(source) => {
            return Err(TodoError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut items = Vec::new();
    let mut skipped = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(line) {
            Ok(todo) => items.push(todo),
            Err(reason) => match policy {
                LoadPolicy::Fail => {
                    return Err(TodoError::Malformed {
                        path: path.to_path_buf(),
                        line: idx + 1,
                        reason,
                    })
                }
                LoadPolicy::Skip => {
                    warn!(
                        path = %path.display(),
                        line = idx + 1,
                        %reason,
                        "skipping malformed todo"
                    );
                    skipped.push(SkippedLine {
                        line: idx + 1,
                        content: line.to_string(),
                        reason,
                    });
                }
            },
        }
    }

    Ok((items, skipped))
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
