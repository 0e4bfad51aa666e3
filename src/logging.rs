//! tracing 日志初始化
//!
//! The TUI owns the terminal, so it logs to `~/.todo-rs/todo.log`; headless
//! subcommands log to stderr. `TODO_LOG` (an `EnvFilter` directive) wins over
//! the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::storage;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "TODO_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Failure is reported, never fatal.
pub fn init(target: LogTarget, default_level: &str) {
    if let Err(e) = try_init(target, default_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn try_init(target: LogTarget, default_level: &str) -> Result<()> {
    let filter = env_filter(default_level);
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File => {
            let path = storage::ensure_app_dir()?.join("todo.log");
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    // 已有全局 subscriber 时忽略
    if let Err(e) = installed {
        tracing::debug!("subscriber already installed: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_and_fallback() {
        std::env::remove_var(LOG_ENV);
        assert_eq!(env_filter("debug").to_string(), "debug");
        assert_eq!(env_filter("todo=trace").to_string(), "todo=trace");
        // 无法解析的级别回退到 info
        assert_eq!(env_filter("todo=loud").to_string(), "info");
    }
}
