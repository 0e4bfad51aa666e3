//! Operations layer shared by the TUI and the headless subcommands.

pub mod tasks;
