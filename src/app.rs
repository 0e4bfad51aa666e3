use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::operations::tasks::{self as ops, Action, Notice, NoticeLevel};
use crate::storage::config::{self, Config};
use crate::storage::tasks::{Category, Filter, Task, TaskStore};
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Default file name offered by the path prompt
const DEFAULT_TASK_FILE: &str = "tasks.txt";

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: NoticeLevel,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: NoticeLevel, duration: Duration) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 键盘输入焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// List navigation and shortcuts
    Normal,
    /// Typing into the new task field
    Editing,
}

/// What the path prompt does on Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAction {
    Save,
    Load,
}

impl PathAction {
    fn action(self) -> Action {
        match self {
            PathAction::Save => Action::Save,
            PathAction::Load => Action::Load,
        }
    }
}

/// Path prompt (Save / Load) 弹窗数据
#[derive(Debug, Clone)]
pub struct PathPrompt {
    pub action: PathAction,
    pub input: String,
}

impl PathPrompt {
    pub fn title(&self) -> &'static str {
        match self.action {
            PathAction::Save => " Save Tasks ",
            PathAction::Load => " Load Tasks ",
        }
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// The task list. Owned here and only mutated through `operations::tasks`.
    pub store: TaskStore,
    /// 当前过滤条件
    pub filter: Filter,
    /// Selection within the filtered view
    pub list_state: ListState,
    /// New task 输入内容
    pub input: String,
    /// Category for the next added task
    pub category: Category,
    pub mode: InputMode,
    /// Save / Load 弹窗
    pub path_prompt: Option<PathPrompt>,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
    pub config: Config,
    persist_config: bool,
}

impl App {
    pub fn new(store: TaskStore, config: Config, theme: Theme) -> Self {
        let mut app = Self {
            should_quit: false,
            store,
            filter: Filter::All,
            list_state: ListState::default(),
            input: String::new(),
            category: Category::default(),
            mode: InputMode::Normal,
            path_prompt: None,
            show_help: false,
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            last_system_dark: detect_system_theme(),
            config,
            persist_config: true,
        };
        app.ensure_selection();
        app
    }

    #[cfg(test)]
    pub fn without_config_persistence(mut self) -> Self {
        self.persist_config = false;
        self
    }

    // ========== Task list ==========

    /// Rows of the current filter, each with its index in the store
    pub fn visible_tasks(&self) -> Vec<(usize, &Task)> {
        ops::on_filter_changed(&self.store, &self.filter)
    }

    /// Store index of the selected row, if any
    pub fn selected_store_index(&self) -> Option<usize> {
        let row = self.list_state.selected()?;
        self.visible_tasks().get(row).map(|(index, _)| *index)
    }

    /// 确保选中项在可见范围内
    pub fn ensure_selection(&mut self) {
        let len = self.visible_tasks().len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            None => Some(0),
            Some(i) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.list_state.select(None);
        self.ensure_selection();
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn prev_filter(&mut self) {
        self.set_filter(self.filter.prev());
    }

    // ========== New task input ==========

    pub fn start_editing(&mut self) {
        self.mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_delete_char(&mut self) {
        self.input.pop();
    }

    pub fn cycle_category(&mut self) {
        self.category = self.category.next();
    }

    /// 创建新任务；空输入静默忽略
    pub fn add_task(&mut self) {
        match ops::on_add_requested(&mut self.store, &self.input, self.category.clone()) {
            Ok(_) => {
                self.input.clear();
                self.ensure_selection();
            }
            Err(e) => self.report_failure(Action::Add, &e),
        }
    }

    /// 删除当前选中的任务
    pub fn remove_selected(&mut self) {
        let index = self.selected_store_index();
        match ops::on_remove_requested(&mut self.store, index) {
            Ok(task) => {
                self.ensure_selection();
                self.show_toast(format!("Removed: {}", task.text), NoticeLevel::Info);
            }
            Err(e) => self.report_failure(Action::Remove, &e),
        }
    }

    // ========== Save / Load ==========

    /// 打开 Save / Load 弹窗，预填上次使用的文件
    pub fn open_path_prompt(&mut self, action: PathAction) {
        let input = self
            .config
            .last_file
            .clone()
            .unwrap_or_else(|| DEFAULT_TASK_FILE.to_string());
        self.path_prompt = Some(PathPrompt { action, input });
    }

    pub fn close_path_prompt(&mut self) {
        self.path_prompt = None;
    }

    pub fn path_input_char(&mut self, c: char) {
        if let Some(prompt) = self.path_prompt.as_mut() {
            prompt.input.push(c);
        }
    }

    pub fn path_delete_char(&mut self) {
        if let Some(prompt) = self.path_prompt.as_mut() {
            prompt.input.pop();
        }
    }

    /// 确认 Save / Load
    pub fn confirm_path_prompt(&mut self) {
        let Some(prompt) = self.path_prompt.take() else {
            return;
        };
        let raw = prompt.input.trim();
        if raw.is_empty() {
            return;
        }
        let path = expand_home(raw);

        let result = match prompt.action {
            PathAction::Save => ops::on_save_requested(&self.store, &path),
            PathAction::Load => ops::on_load_requested(&mut self.store, &path),
        };

        match result {
            Ok(_) => {
                if prompt.action == PathAction::Load {
                    self.list_state.select(None);
                    self.ensure_selection();
                }
                self.config.remember_file(&path);
                self.persist_config();
                if let Some(notice) = ops::success_notice(prompt.action.action()) {
                    self.show_notice(notice);
                }
            }
            Err(e) => self.report_failure(prompt.action.action(), &e),
        }
    }

    // ========== Theme ==========

    /// 切换到下一个主题
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.colors = get_theme_colors(self.theme);
        self.config.theme.name = self.theme.label().to_string();
        self.persist_config();
        tracing::debug!("theme changed to {}", self.theme.label());
        self.show_toast(format!("Theme: {}", self.theme.label()), NoticeLevel::Info);
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    // ========== Toast ==========

    fn report_failure(&mut self, action: Action, err: &crate::error::TodoError) {
        if let Some(notice) = ops::failure_notice(action, err) {
            self.show_notice(notice);
        }
    }

    pub fn show_notice(&mut self, notice: Notice) {
        let message = format!("{}: {}", notice.title, notice.message);
        self.show_toast(message, notice.level);
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>, level: NoticeLevel) {
        let secs = match level {
            NoticeLevel::Info => 2,
            NoticeLevel::Warning | NoticeLevel::Critical => 4,
        };
        self.toast = Some(Toast::new(message, level, Duration::from_secs(secs)));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    fn persist_config(&self) {
        if !self.persist_config {
            return;
        }
        if let Err(e) = config::save_config(&self.config) {
            tracing::warn!("failed to save config: {}", e);
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut store = TaskStore::new();
        store.add("Buy milk", Category::Personal).unwrap();
        store.add("Finish report", Category::Work).unwrap();
        store.add("Water plants", Category::Personal).unwrap();
        App::new(store, Config::default(), Theme::Dark).without_config_persistence()
    }

    fn texts(app: &App) -> Vec<String> {
        app.store.tasks().iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_new_selects_first_row() {
        let app = test_app();
        assert_eq!(app.list_state.selected(), Some(0));

        let empty = App::new(TaskStore::new(), Config::default(), Theme::Dark);
        assert_eq!(empty.list_state.selected(), None);
    }

    #[test]
    fn test_add_clears_input() {
        let mut app = test_app();
        app.input = "  Pay rent ".to_string();
        app.category = Category::Urgent;
        app.add_task();

        assert!(app.input.is_empty());
        assert_eq!(
            app.store.tasks().last(),
            Some(&Task::new("Pay rent", Category::Urgent))
        );
    }

    #[test]
    fn test_add_blank_is_silent() {
        let mut app = test_app();
        app.input = "   ".to_string();
        app.add_task();

        assert_eq!(app.store.len(), 3);
        assert!(app.toast.is_none());
        // 输入框保留原内容
        assert_eq!(app.input, "   ");
    }

    #[test]
    fn test_remove_maps_filtered_row_to_store() {
        let mut app = test_app();
        app.set_filter(Filter::Only(Category::Personal));
        app.select_next(); // second visible row: "Water plants"
        assert_eq!(app.selected_store_index(), Some(2));

        app.remove_selected();
        assert_eq!(texts(&app), vec!["Buy milk", "Finish report"]);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_remove_without_selection_shows_notice() {
        let mut app = App::new(TaskStore::new(), Config::default(), Theme::Dark)
            .without_config_persistence();
        app.remove_selected();

        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.level, NoticeLevel::Info);
        assert!(toast.message.contains("Please select a task to remove!"));
    }

    #[test]
    fn test_filter_cycle_resets_selection() {
        let mut app = test_app();
        app.select_next();
        app.next_filter();
        assert_eq!(app.filter, Filter::Only(Category::Personal));
        assert_eq!(app.list_state.selected(), Some(0));

        app.set_filter(Filter::Only(Category::Urgent));
        assert_eq!(app.list_state.selected(), None);
        assert!(app.visible_tasks().is_empty());
    }

    #[test]
    fn test_save_and_load_through_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");

        let mut app = test_app();
        app.open_path_prompt(PathAction::Save);
        app.path_prompt.as_mut().unwrap().input = path.to_string_lossy().to_string();
        app.confirm_path_prompt();
        assert!(app.path_prompt.is_none());
        assert!(app.toast.as_ref().unwrap().message.contains("saved successfully"));
        assert_eq!(
            app.config.last_file.as_deref(),
            Some(&*path.to_string_lossy())
        );

        let mut other = App::new(TaskStore::new(), app.config.clone(), Theme::Dark)
            .without_config_persistence();
        other.open_path_prompt(PathAction::Load);
        // 预填上次使用的文件
        assert_eq!(
            other.path_prompt.as_ref().unwrap().input,
            path.to_string_lossy()
        );
        other.confirm_path_prompt();
        assert_eq!(other.store, app.store);
        assert_eq!(other.list_state.selected(), Some(0));
    }

    #[test]
    fn test_path_prompt_kinds() {
        let mut app = test_app();
        app.open_path_prompt(PathAction::Save);
        assert_eq!(app.path_prompt.as_ref().unwrap().title(), " Save Tasks ");
        app.close_path_prompt();
        app.open_path_prompt(PathAction::Load);
        assert_eq!(app.path_prompt.as_ref().unwrap().title(), " Load Tasks ");

        assert_eq!(PathAction::Save.action(), Action::Save);
        assert_eq!(PathAction::Load.action(), Action::Load);
    }

    #[test]
    fn test_load_missing_file_keeps_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app();
        app.path_prompt = Some(PathPrompt {
            action: PathAction::Load,
            input: dir.path().join("missing.txt").to_string_lossy().to_string(),
        });
        app.confirm_path_prompt();

        assert_eq!(app.store.len(), 3);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.level, NoticeLevel::Warning);
        assert!(toast.message.contains("File not found!"));
        assert!(app.config.last_file.is_none());
    }

    #[test]
    fn test_cycle_theme_updates_config() {
        let mut app = test_app();
        app.cycle_theme();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.config.theme.name, "Light");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("tasks.txt"), PathBuf::from("tasks.txt"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/t.txt"), home.join("t.txt"));
        }
    }
}
