//! 统一错误类型定义
//!
//! Every fallible operation in the crate returns [`TodoError`]. The UI layer
//! turns each variant into a user-facing notice, see
//! [`crate::operations::tasks::Notice`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Todo 错误类型
#[derive(Debug, Error)]
pub enum TodoError {
    /// Add was called with blank text. Never shown to the user.
    #[error("task text is empty")]
    EmptyInputIgnored,

    /// Remove was called with no selection or a stale index
    #[error("no task selected (index {index:?}, {len} tasks)")]
    Selection { index: Option<usize>, len: usize },

    /// The chosen task file does not exist
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A line of a task file could not be parsed
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    pub fn selection(index: Option<usize>, len: usize) -> Self {
        Self::Selection { index, len }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
