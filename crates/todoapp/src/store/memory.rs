use super::TodoRepository;
use crate::error::Result;
use crate::model::Todo;

/// In-memory repository. Does NOT persist data.
///
/// `new()` starts with the two demo entries so a fresh screen is never empty.
#[derive(Debug, Clone)]
pub struct MockTodoRepository {
    items: Vec<Todo>,
}

impl Default for MockTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::with_items(vec![Todo::new("Eat lunch"), Todo::new("Eat Halloween candy")])
    }

    pub fn empty() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<Todo>) -> Self {
        Self { items }
    }
}

impl TodoRepository for MockTodoRepository {
    fn get_all(&self) -> Vec<Todo> {
        self.items.clone()
    }

    fn insert(&mut self, todo: Todo) -> Result<()> {
        self.items.push(todo);
        Ok(())
    }

    fn delete(&mut self, todo: &Todo) -> Result<bool> {
        match self.items.iter().position(|t| t == todo) {
            Some(pos) => {
                self.items.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    pub struct RepoFixture {
        pub repo: MockTodoRepository,
    }

    impl Default for RepoFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RepoFixture {
        pub fn new() -> Self {
            Self {
                repo: MockTodoRepository::empty(),
            }
        }

        /// Adds `count` todos with distinct, fixed due dates one day apart.
        pub fn with_todos(mut self, count: usize) -> Self {
            let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
            for i in 0..count {
                let todo = Todo::with_due(
                    format!("Test todo {}", i + 1),
                    base + Duration::days(i as i64),
                );
                self.repo.insert(todo).unwrap();
            }
            self
        }

        pub fn with_todo(mut self, todo: Todo) -> Self {
            self.repo.insert(todo).unwrap();
            self
        }
    }
}
