use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, InputMode, PathAction};

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 优先处理弹窗事件
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    if app.path_prompt.is_some() {
        handle_path_prompt_key(app, key);
        return;
    }

    match app.mode {
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

/// 处理列表模式的键盘事件
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 功能按键 - 输入新任务
        KeyCode::Char('i') | KeyCode::Char('n') | KeyCode::Char('a') => app.start_editing(),

        // 功能按键 - 删除
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.remove_selected(),

        // 功能按键 - 过滤
        KeyCode::Char('f') | KeyCode::Tab => app.next_filter(),
        KeyCode::Char('F') | KeyCode::BackTab => app.prev_filter(),

        // 功能按键 - 分类
        KeyCode::Char('c') => app.cycle_category(),

        // 功能按键 - Save / Load
        KeyCode::Char('s') => app.open_path_prompt(PathAction::Save),
        KeyCode::Char('o') | KeyCode::Char('l') => app.open_path_prompt(PathAction::Load),

        // 功能按键 - Theme
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),

        // 功能按键 - 帮助
        KeyCode::Char('?') => app.show_help = true,

        _ => {}
    }
}

/// 处理新任务输入框的键盘事件
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 添加任务，保持输入焦点方便连续添加
        KeyCode::Enter => app.add_task(),

        KeyCode::Esc => app.stop_editing(),

        KeyCode::Tab => app.cycle_category(),

        KeyCode::Backspace => app.input_delete_char(),

        KeyCode::Char(c) => app.input_char(c),

        _ => {}
    }
}

/// 处理 Save / Load 弹窗的键盘事件
fn handle_path_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.confirm_path_prompt(),
        KeyCode::Esc => app.close_path_prompt(),
        KeyCode::Backspace => app.path_delete_char(),
        KeyCode::Char(c) => app.path_input_char(c),
        _ => {}
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
            app.show_help = false;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::Config;
    use crate::storage::tasks::{Category, Filter, Task, TaskStore};
    use crate::theme::Theme;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn test_app() -> App {
        App::new(TaskStore::new(), Config::default(), Theme::Dark).without_config_persistence()
    }

    #[test]
    fn test_type_and_add_tasks() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.mode, InputMode::Editing);

        type_str(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Finish report");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(
            app.store.tasks(),
            &[
                Task::new("Buy milk", Category::Personal),
                Task::new("Finish report", Category::Work),
            ]
        );
    }

    #[test]
    fn test_shortcut_letters_are_text_while_editing() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "q?dfs");
        assert!(!app.should_quit);
        assert!(!app.show_help);
        assert_eq!(app.input, "q?dfs");
    }

    #[test]
    fn test_filter_and_remove_keys() {
        let mut app = test_app();
        app.store.add("one", Category::Work).unwrap();
        app.store.add("two", Category::Urgent).unwrap();
        app.ensure_selection();

        press(&mut app, KeyCode::Char('F'));
        assert_eq!(app.filter, Filter::Only(Category::Urgent));

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store.tasks(), &[Task::new("one", Category::Work)]);

        // 过滤结果为空时删除给出提示
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store.len(), 1);
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_path_prompt_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('s'));
        assert!(app.path_prompt.is_some());

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.path_prompt.as_ref().unwrap().input, "tasks.tx");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.path_prompt.is_none());
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('i'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
