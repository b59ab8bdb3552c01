use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} ({})", VERSION, GIT_HASH)
        }
    })
}

fn parse_due_arg(s: &str) -> Result<DateTime<Utc>, String> {
    todoapp::model::parse_due(s).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "todo", bin_name = "todo", version = get_version())]
#[command(about = "A single-screen to-do list for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the todo file (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use the demo list in memory; nothing is saved
    #[arg(long, global = true)]
    pub memory: bool,

    /// Config file to read instead of the default todo.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List todos
    #[command(alias = "ls")]
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a todo
    #[command(alias = "a")]
    Add {
        /// Due date: YYYY-MM-DD or RFC 3339 (defaults to now)
        #[arg(long, value_parser = parse_due_arg)]
        due: Option<DateTime<Utc>>,

        /// Text words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Remove the todo at a position
    #[command(alias = "rm")]
    Remove {
        /// Position as shown by `todo list` (starting at 1)
        position: usize,
    },

    /// Interactive single-screen mode
    Screen,

    /// Print the path of the todo file
    Path,

    /// Show the resolved configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = parse(&["todo"]);
        assert!(cli.command.is_none());
        assert!(!cli.memory);
    }

    #[test]
    fn add_joins_words_and_parses_due() {
        let cli = parse(&["todo", "add", "--due", "2024-12-24", "buy", "gifts"]);
        match cli.command {
            Some(Commands::Add { due, text }) => {
                assert_eq!(text, vec!["buy", "gifts"]);
                assert_eq!(due, Some(Utc.with_ymd_and_hms(2024, 12, 24, 0, 0, 0).unwrap()));
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn add_requires_text() {
        assert!(Cli::try_parse_from(["todo", "add"]).is_err());
    }

    #[test]
    fn bad_due_is_rejected() {
        assert!(Cli::try_parse_from(["todo", "add", "--due", "soon", "x"]).is_err());
    }

    #[test]
    fn rm_alias_and_position() {
        let cli = parse(&["todo", "rm", "2"]);
        assert!(matches!(cli.command, Some(Commands::Remove { position: 2 })));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["todo", "ls", "--memory", "--data-dir", "/tmp/x"]);
        assert!(cli.memory);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }
}
