//! CLI definition for the `monday` command-line interface.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

/// monday - work with monday.com boards from the terminal
///
/// Reads the API token from MONDAY_API_TOKEN or the `api_token` key of the
/// config file.
#[derive(Parser, Debug)]
#[command(name = "monday")]
#[command(version)]
#[command(about = "Query and update monday.com boards")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List users in the account
    Users,
    /// List boards
    Boards,
    /// List the groups of a board
    Groups {
        /// Board id
        board: u64,
    },
    /// List the columns of a board
    Columns {
        /// Board id
        board: u64,
    },
    /// List a board's items with decoded column values
    Items {
        /// Board id
        board: u64,
    },
    /// Show the labels of a status or dropdown column
    Labels {
        /// Board id
        board: u64,
        /// Column id
        column: String,
    },
    /// Create an item
    AddItem(AddItemArgs),
    /// Post an update on an item
    AddUpdate {
        /// Item id
        item: String,
        /// Update text
        body: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct AddItemArgs {
    /// Board id
    pub board: u64,
    /// Group id
    pub group: String,
    /// Item name
    pub name: String,

    /// Plain text value
    #[arg(long, value_name = "COLUMN=TEXT")]
    pub text: Vec<Assignment>,

    /// Date value, `YYYY-MM-DD` optionally followed by ` HH:MM:SS`
    #[arg(long, value_name = "COLUMN=DATE")]
    pub date: Vec<Assignment>,

    /// Status label index
    #[arg(long, value_name = "COLUMN=INDEX")]
    pub status: Vec<Assignment>,

    /// Checkbox state, passed through as given
    #[arg(long, value_name = "COLUMN=true|false")]
    pub checkbox: Vec<Assignment>,

    /// Comma-separated user ids
    #[arg(long, value_name = "COLUMN=ID,ID")]
    pub people: Vec<Assignment>,

    /// Comma-separated dropdown label ids
    #[arg(long, value_name = "COLUMN=ID,ID")]
    pub dropdown: Vec<Assignment>,
}

/// A `COLUMN=VALUE` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: String,
    pub value: String,
}

impl FromStr for Assignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected COLUMN=VALUE, got '{}'", s))?;
        let column = column.trim();
        if column.is_empty() {
            return Err(format!("missing column id in '{}'", s));
        }
        Ok(Self {
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_parse() {
        let a: Assignment = "status=2".parse().unwrap();
        assert_eq!(a.column, "status");
        assert_eq!(a.value, "2");

        let a: Assignment = "text=a=b".parse().unwrap();
        assert_eq!(a.value, "a=b");

        assert!("status".parse::<Assignment>().is_err());
        assert!("=2".parse::<Assignment>().is_err());
    }

    #[test]
    fn test_parse_add_item() {
        let cli = Cli::try_parse_from([
            "monday",
            "add-item",
            "42",
            "topics",
            "New task",
            "--date",
            "due=2024-01-05",
            "--people",
            "owners=1,2",
            "--status",
            "status=1",
        ])
        .unwrap();
        match cli.command {
            Commands::AddItem(args) => {
                assert_eq!(args.board, 42);
                assert_eq!(args.group, "topics");
                assert_eq!(args.date[0].column, "due");
                assert_eq!(args.people[0].value, "1,2");
                assert!(args.text.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["monday", "items", "7", "--json", "--debug"]).unwrap();
        assert!(cli.json);
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Items { board: 7 }));
    }

    #[test]
    fn test_board_id_must_be_numeric() {
        assert!(Cli::try_parse_from(["monday", "groups", "roadmap"]).is_err());
    }
}
