//! Task operations behind the UI
//!
//! The TUI (and the headless CLI subcommands) never touch [`TaskStore`] or the
//! filesystem directly; every user request goes through one of the `on_*`
//! functions below. They do the I/O, log what happened and hand back a
//! `Result`; turning a failure into something the user sees is
//! [`failure_notice`]'s job.
//!
//! ```text
//! TUI (src/app.rs)     ──┐
//!                        ├──> operations::tasks ──> storage::tasks (TaskStore, file I/O)
//! CLI (src/cli/tasks.rs) ┘
//! ```

use std::path::Path;

use crate::error::{Result, TodoError};
use crate::storage::tasks::{self, Category, Filter, Task, TaskStore};

/// Which request a notice answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Save,
    Load,
}

/// Notice severity (information / warning / critical message)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Critical,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn info(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title,
            message: message.into(),
        }
    }

    pub fn warning(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title,
            message: message.into(),
        }
    }

    pub fn critical(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Critical,
            title,
            message: message.into(),
        }
    }
}

/// Add a task from raw input text
pub fn on_add_requested(store: &mut TaskStore, raw_text: &str, category: Category) -> Result<Task> {
    let task = store.add(raw_text, category)?.clone();
    tracing::debug!(category = %task.category, "task added: {}", task.text);
    Ok(task)
}

/// Remove the task at a canonical store index (`None` = nothing selected)
pub fn on_remove_requested(store: &mut TaskStore, selected: Option<usize>) -> Result<Task> {
    let task = store.remove_at(selected)?;
    tracing::debug!(index = ?selected, "task removed: {}", task.text);
    Ok(task)
}

/// Visible rows for `filter`, each with its canonical store index
pub fn on_filter_changed<'a>(store: &'a TaskStore, filter: &Filter) -> Vec<(usize, &'a Task)> {
    let rows = store.filter_indexed(filter);
    tracing::trace!(filter = filter.label(), "{} of {} tasks visible", rows.len(), store.len());
    rows
}

/// Write the whole list to `path`. Returns the number of tasks written.
pub fn on_save_requested(store: &TaskStore, path: &Path) -> Result<usize> {
    tasks::write_task_file(path, &store.serialize()).inspect_err(|e| {
        tracing::error!("failed to save tasks to {}: {}", path.display(), e);
    })?;
    tracing::info!("saved {} tasks to {}", store.len(), path.display());
    Ok(store.len())
}

/// Replace the list with the content of `path`.
///
/// The store is only replaced once the whole file has been read and parsed.
pub fn on_load_requested(store: &mut TaskStore, path: &Path) -> Result<usize> {
    let loaded = tasks::read_task_file(path)
        .and_then(|content| store.deserialize(&content))
        .inspect_err(|e| {
            tracing::warn!("failed to load tasks from {}: {}", path.display(), e);
        })?;
    tracing::info!("loaded {} tasks from {}", loaded, path.display());
    Ok(loaded)
}

/// Notice shown after a successful request, if any
pub fn success_notice(action: Action) -> Option<Notice> {
    match action {
        Action::Save => Some(Notice::info("Success", "Tasks saved successfully!")),
        Action::Load => Some(Notice::info("Success", "Tasks loaded successfully!")),
        Action::Add | Action::Remove => None,
    }
}

/// Notice for a failed request. Blank input is ignored silently.
pub fn failure_notice(action: Action, err: &TodoError) -> Option<Notice> {
    let notice = match err {
        TodoError::EmptyInputIgnored => return None,
        TodoError::Selection { .. } => {
            Notice::info("Selection Error", "Please select a task to remove!")
        }
        TodoError::FileNotFound { .. } => Notice::warning("Error", "File not found!"),
        _ => match action {
            Action::Save => Notice::critical("Error", format!("Failed to save tasks: {}", err)),
            Action::Load => Notice::critical("Error", format!("Failed to load tasks: {}", err)),
            Action::Add | Action::Remove => Notice::critical("Error", err.to_string()),
        },
    };
    Some(notice)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(lines: &[(&str, Category)]) -> TaskStore {
        let mut store = TaskStore::new();
        for (text, category) in lines {
            store.add(text, category.clone()).unwrap();
        }
        store
    }

    #[test]
    fn test_blank_add_has_no_notice() {
        let mut store = TaskStore::new();
        let err = on_add_requested(&mut store, "   ", Category::Work).unwrap_err();
        assert!(store.is_empty());
        assert_eq!(failure_notice(Action::Add, &err), None);
    }

    #[test]
    fn test_remove_without_selection_notice() {
        let mut store = TaskStore::new();
        let err = on_remove_requested(&mut store, None).unwrap_err();
        let notice = failure_notice(Action::Remove, &err).unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.title, "Selection Error");
        assert_eq!(notice.message, "Please select a task to remove!");
    }

    #[test]
    fn test_filter_changed_maps_back_to_store() {
        let store = store_with(&[
            ("a", Category::Work),
            ("b", Category::Urgent),
            ("c", Category::Work),
        ]);
        let rows = on_filter_changed(&store, &Filter::Only(Category::Work));
        let idx: Vec<usize> = rows.iter().map(|(i, _)| *i).collect();
        assert_eq!(idx, vec![0, 2]);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");

        let store = store_with(&[("Buy milk", Category::Personal), ("Ship it", Category::Urgent)]);
        assert_eq!(on_save_requested(&store, &path).unwrap(), 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Buy milk|Personal\nShip it|Urgent\n"
        );

        let mut loaded = store_with(&[("stale", Category::Work)]);
        assert_eq!(on_load_requested(&mut loaded, &path).unwrap(), 2);
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_load_missing_file_is_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&[("keep me", Category::Work)]);
        let before = store.clone();

        let err = on_load_requested(&mut store, &dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, TodoError::FileNotFound { .. }));
        assert_eq!(store, before);

        let notice = failure_notice(Action::Load, &err).unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "File not found!");
    }

    #[test]
    fn test_load_malformed_file_keeps_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "ok|Work\nnot|ok|Urgent\n").unwrap();

        let mut store = store_with(&[("keep me", Category::Work)]);
        let before = store.clone();
        let err = on_load_requested(&mut store, &path).unwrap_err();
        assert_eq!(store, before);

        let notice = failure_notice(Action::Load, &err).unwrap();
        assert_eq!(notice.level, NoticeLevel::Critical);
        assert!(notice.message.starts_with("Failed to load tasks: line 2"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("tasks.txt");
        let store = store_with(&[("a", Category::Work)]);

        let err = on_save_requested(&store, &path).unwrap_err();
        assert!(matches!(err, TodoError::Io(_)));
        let notice = failure_notice(Action::Save, &err).unwrap();
        assert!(notice.message.starts_with("Failed to save tasks:"));
    }

    #[test]
    fn test_success_notices() {
        assert_eq!(
            success_notice(Action::Save).unwrap().message,
            "Tasks saved successfully!"
        );
        assert_eq!(
            success_notice(Action::Load).unwrap().message,
            "Tasks loaded successfully!"
        );
        assert_eq!(success_notice(Action::Add), None);
    }
}
