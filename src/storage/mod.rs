pub mod config;
pub mod tasks;

use std::path::{Path, PathBuf};

use crate::error::{Result, TodoError};

/// 获取 ~/.todo-rs/ 目录路径
pub fn app_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".todo-rs"))
        .ok_or_else(|| TodoError::config("cannot find home directory"))
}

/// 确保 ~/.todo-rs/ 目录存在
pub fn ensure_app_dir() -> Result<PathBuf> {
    let dir = app_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 从 TOML 文件加载反序列化数据
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 将数据序列化后保存到 TOML 文件
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = toml::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}
