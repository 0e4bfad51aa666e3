mod colors;
mod detect;

use ratatui::style::Color;

pub use colors::*;
pub use detect::detect_system_theme;

use crate::error::{Result, TodoError};
use crate::storage::tasks::Category;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
    Dracula,
    Nord,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Auto,
            Theme::Dark,
            Theme::Light,
            Theme::Dracula,
            Theme::Nord,
        ]
    }

    /// 从名称创建主题（用于配置加载），大小写不敏感
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(name.trim()))
    }

    /// Like [`Theme::from_name`], but an unknown name is an error
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| {
            let known: Vec<&str> = Self::all().iter().map(|t| t.label()).collect();
            TodoError::config(format!(
                "unknown theme '{}' (expected one of: {})",
                name,
                known.join(", ")
            ))
        })
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let i = all.iter().position(|t| t == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行等）
    pub bg_secondary: Color,
    pub logo: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    pub border: Color,
    /// Filter tab 选中前景色
    pub tab_active_fg: Color,
    /// Filter tab 选中背景色
    pub tab_active_bg: Color,
    /// 信息色 - info notices
    pub info: Color,
    /// 警告色 - warning notices
    pub warning: Color,
    /// 错误色 - critical notices
    pub error: Color,
    /// Category badge colors
    pub category_accents: [Color; 3],
    /// Category row tints
    pub category_backgrounds: [Color; 3],
}

impl ThemeColors {
    /// Accent for a category; unknown categories are not color coded
    pub fn category_accent(&self, category: &Category) -> Color {
        category
            .builtin_index()
            .map(|i| self.category_accents[i])
            .unwrap_or(self.muted)
    }

    pub fn category_background(&self, category: &Category) -> Color {
        category
            .builtin_index()
            .map(|i| self.category_backgrounds[i])
            .unwrap_or(self.bg)
    }
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if detect_system_theme() {
                dark_colors()
            } else {
                light_colors()
            }
        }
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Dracula => dracula_colors(),
        Theme::Nord => nord_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("Nord"), Some(Theme::Nord));
        assert_eq!(Theme::from_name("dracula"), Some(Theme::Dracula));
        assert_eq!(Theme::from_name("Solarized"), None);
        assert!(matches!(Theme::parse("Solarized"), Err(TodoError::Config(_))));
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Theme::Auto.next(), Theme::Dark);
        assert_eq!(Theme::Nord.next(), Theme::Auto);
    }

    #[test]
    fn test_unknown_category_is_not_colored() {
        let colors = light_colors();
        let other = Category::Other("Holiday".to_string());
        assert_eq!(colors.category_accent(&other), colors.muted);
        assert_eq!(colors.category_background(&other), colors.bg);
        assert_eq!(
            colors.category_background(&Category::Urgent),
            Color::Rgb(255, 235, 238)
        );
    }
}
