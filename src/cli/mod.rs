//! CLI 模块

pub mod tasks;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::storage::tasks::Category;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(version)]
#[command(about = "Terminal task list with categories, saved to a plain text file")]
pub struct Cli {
    /// Task file to load on startup (TUI mode)
    pub file: Option<PathBuf>,

    /// Theme for this run (Auto, Dark, Light, Dracula, Nord)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive task list (default)
    Tui {
        /// Task file to load on startup
        file: Option<PathBuf>,
    },
    /// Print the tasks in a file
    List {
        /// Task file
        file: PathBuf,
        /// Only show tasks in this category
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },
    /// Add a task to a file (the file is created if missing)
    Add {
        /// Task file
        file: PathBuf,
        /// Task text
        text: String,
        /// Task category
        #[arg(short, long, value_parser = parse_category, default_value = "personal")]
        category: Category,
    },
}

/// Parse a built-in category name, case-insensitive
fn parse_category(s: &str) -> Result<Category, String> {
    Category::builtin()
        .into_iter()
        .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| format!("unknown category '{}' (expected personal, work or urgent)", s))
}
