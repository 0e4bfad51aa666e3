//! Headless `list` / `add` subcommands

use std::path::Path;

use crate::error::{Result, TodoError};
use crate::operations::tasks as ops;
use crate::storage::tasks::{Category, Filter, Task, TaskStore};

/// `todo list FILE [-c CATEGORY]`
pub fn list(file: &Path, category: Option<Category>) -> Result<()> {
    let mut store = TaskStore::new();
    ops::on_load_requested(&mut store, file)?;
    if store.is_empty() {
        println!("No tasks in {}.", file.display());
        return Ok(());
    }

    let filter = category.map(Filter::Only).unwrap_or_default();
    let rows = ops::on_filter_changed(&store, &filter);
    if rows.is_empty() {
        println!("No tasks ({}).", filter.label());
        return Ok(());
    }
    for line in format_rows(&rows) {
        println!("{}", line);
    }
    Ok(())
}

/// `todo add FILE TEXT [-c CATEGORY]`
pub fn add(file: &Path, text: &str, category: Category) -> Result<()> {
    let mut store = TaskStore::new();
    match ops::on_load_requested(&mut store, file) {
        Ok(_) | Err(TodoError::FileNotFound { .. }) => {}
        Err(e) => return Err(e),
    }

    let task = ops::on_add_requested(&mut store, text, category)?;
    ops::on_save_requested(&store, file)?;
    println!("Added: {} [{}]", task.text, task.category);
    Ok(())
}

/// One line per task: store index, category, text
fn format_rows(rows: &[(usize, &Task)]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|(_, t)| t.category.label().chars().count())
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|(i, t)| {
            format!(
                "{:>3}  {} {:<width$}  {}",
                i,
                t.category.icon(),
                t.category.label(),
                t.text,
                width = width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rows() {
        let a = Task::new("Buy milk", Category::Personal);
        let b = Task::new("Ship it", Category::Urgent);
        let lines = format_rows(&[(0, &a), (3, &b)]);
        assert_eq!(lines[0], "  0  🏠 Personal  Buy milk");
        assert_eq!(lines[1], "  3  🔥 Urgent    Ship it");
    }

    #[test]
    fn test_add_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");

        add(&path, "Buy milk", Category::Personal).unwrap();
        add(&path, "  Finish report ", Category::Work).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Buy milk|Personal\nFinish report|Work\n"
        );
    }

    #[test]
    fn test_add_blank_text_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        assert!(matches!(
            add(&path, "   ", Category::Work),
            Err(TodoError::EmptyInputIgnored)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_add_refuses_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        std::fs::write(&path, "a|b|c\n").unwrap();

        assert!(matches!(
            add(&path, "new", Category::Work),
            Err(TodoError::Format { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a|b|c\n");
    }

    #[test]
    fn test_list_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            list(&dir.path().join("none.txt"), None),
            Err(TodoError::FileNotFound { .. })
        ));
    }
}
