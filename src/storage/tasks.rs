//! Task list model and its plain text file format
//!
//! A task file holds one task per line, `<text>|<category>`, with no header and
//! no escaping. [`TaskStore`] is the in-memory list the UI works on; it never
//! touches the filesystem itself; [`read_task_file`] and [`write_task_file`]
//! do the I/O.

use std::fmt;
use std::io;
use std::path::Path;

use crate::error::{Result, TodoError};

/// Field separator in the task file
pub const SEPARATOR: char = '|';

/// 任务分类
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Personal,
    Work,
    Urgent,
    /// Label read from a file that is not one of the built-in categories.
    /// Kept verbatim so saving writes it back unchanged.
    Other(String),
}

impl Category {
    /// Built-in categories, in selector order
    pub fn builtin() -> [Category; 3] {
        [Category::Personal, Category::Work, Category::Urgent]
    }

    /// Label written to the task file
    pub fn label(&self) -> &str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Urgent => "Urgent",
            Category::Other(label) => label,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Personal => "🏠",
            Category::Work => "💼",
            Category::Urgent => "🔥",
            Category::Other(_) => "·",
        }
    }

    /// Position among the built-ins, `None` for [`Category::Other`]
    pub fn builtin_index(&self) -> Option<usize> {
        match self {
            Category::Personal => Some(0),
            Category::Work => Some(1),
            Category::Urgent => Some(2),
            Category::Other(_) => None,
        }
    }

    /// Parse a label read from a task file.
    ///
    /// Accepts the plain labels and the icon-decorated labels older files were
    /// written with ("🏠 Personal"). Anything else becomes [`Category::Other`].
    pub fn from_label(label: &str) -> Category {
        let bare = match label.split_once(' ') {
            Some((icon, rest)) if ["🏠", "💼", "🔥"].contains(&icon) => rest,
            _ => label,
        };
        match bare {
            "Personal" => Category::Personal,
            "Work" => Category::Work,
            "Urgent" => Category::Urgent,
            _ => Category::Other(label.to_string()),
        }
    }

    /// Next built-in category (cycles; `Other` restarts at `Personal`)
    pub fn next(&self) -> Category {
        let all = Self::builtin();
        let next = self.builtin_index().map(|i| (i + 1) % all.len()).unwrap_or(0);
        all[next].clone()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 任务数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub category: Category,
}

impl Task {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// 列表过滤条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Filters offered by the filter bar, in display order
    pub fn all() -> [Filter; 4] {
        [
            Filter::All,
            Filter::Only(Category::Personal),
            Filter::Only(Category::Work),
            Filter::Only(Category::Urgent),
        ]
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => task.category == *category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Filter::All => "All Tasks",
            Filter::Only(category) => category.label(),
        }
    }

    fn position(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Filter {
        let all = Self::all();
        all[(self.position() + 1) % all.len()].clone()
    }

    pub fn prev(&self) -> Filter {
        let all = Self::all();
        all[(self.position() + all.len() - 1) % all.len()].clone()
    }
}

/// Ordered in-memory task list.
///
/// Insertion order is the only ordering and doubles as the index used by
/// [`TaskStore::remove_at`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a task. Blank text is rejected with
    /// [`TodoError::EmptyInputIgnored`] and nothing is stored.
    ///
    /// Line breaks inside the text are folded into single spaces, one task is
    /// always one line in the task file.
    pub fn add(&mut self, text: &str, category: Category) -> Result<&Task> {
        let text = single_line(text);
        if text.is_empty() {
            return Err(TodoError::EmptyInputIgnored);
        }
        self.tasks.push(Task::new(text, category));
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Remove the task at `index`. `None` means nothing is selected.
    pub fn remove_at(&mut self, index: Option<usize>) -> Result<Task> {
        match index {
            Some(i) if i < self.tasks.len() => Ok(self.tasks.remove(i)),
            _ => Err(TodoError::selection(index, self.tasks.len())),
        }
    }

    pub fn filter(&self, filter: &Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Like [`TaskStore::filter`], paired with each task's index in the store
    pub fn filter_indexed(&self, filter: &Filter) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| filter.matches(t))
            .collect()
    }

    pub fn count(&self, filter: &Filter) -> usize {
        self.tasks.iter().filter(|t| filter.matches(t)).count()
    }

    /// Render the task file content: one `text|category` line per task
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for task in &self.tasks {
            out.push_str(&task.text);
            out.push(SEPARATOR);
            out.push_str(task.category.label());
            out.push('\n');
        }
        out
    }

    /// Replace the whole list with the tasks parsed from `blob`.
    ///
    /// All or nothing: on a parse error the current tasks are left untouched.
    /// Returns the number of tasks loaded.
    pub fn deserialize(&mut self, blob: &str) -> Result<usize> {
        let tasks = parse_tasks(blob)?;
        self.tasks = tasks;
        Ok(self.tasks.len())
    }
}

/// Parse task file content without touching any store
pub fn parse_tasks(blob: &str) -> Result<Vec<Task>> {
    let mut tasks = Vec::new();
    for (i, raw) in blob.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        tasks.push(parse_line(i + 1, line)?);
    }
    Ok(tasks)
}

fn parse_line(line_no: usize, line: &str) -> Result<Task> {
    let mut fields = line.split(SEPARATOR);
    let (Some(text), Some(category), None) = (fields.next(), fields.next(), fields.next()) else {
        let found = line.matches(SEPARATOR).count();
        return Err(TodoError::format(
            line_no,
            format!("expected exactly one '{}' separator, found {}", SEPARATOR, found),
        ));
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(TodoError::format(line_no, "task text is empty"));
    }
    Ok(Task::new(text, Category::from_label(category.trim())))
}

/// 读取任务文件，文件不存在时返回 FileNotFound
pub fn read_task_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TodoError::file_not_found(path),
        _ => TodoError::Io(e),
    })
}

/// 多行文本合并为一行
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 写入任务文件
pub fn write_task_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
