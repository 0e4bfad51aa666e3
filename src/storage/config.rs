//! 应用配置持久化

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{app_dir, ensure_app_dir, load_toml, save_toml};
use crate::error::Result;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Last file successfully saved to or loaded from; prefills the path prompt
    #[serde(default)]
    pub last_file: Option<String>,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive, overridden by `TODO_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Remember `path` as the most recently used task file
    pub fn remember_file(&mut self, path: &Path) {
        self.last_file = Some(path.to_string_lossy().to_string());
    }
}

/// 获取配置文件路径
fn config_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("config.toml"))
}

/// 加载配置（不存在或无法解析则返回默认值）
pub fn load_config() -> Config {
    let Ok(path) = config_path() else {
        return Config::default();
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match load_toml(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring unreadable config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    // 确保 ~/.todo-rs 目录存在
    let dir = ensure_app_dir()?;
    save_toml(&dir.join("config.toml"), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml"));
        assert_eq!(config, Config::default());
        assert_eq!(config.theme.name, "Auto");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "last_file = \"/tmp/tasks.txt\"\n").unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.last_file.as_deref(), Some("/tmp/tasks.txt"));
        assert_eq!(config.theme.name, "Auto");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_broken_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = [[[").unwrap();

        assert_eq!(load_config_from(&path), Config::default());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.theme.name = "Nord".to_string();
        config.remember_file(Path::new("/home/me/tasks.txt"));
        save_toml(&path, &config).unwrap();

        assert_eq!(load_config_from(&path), config);
    }
}
