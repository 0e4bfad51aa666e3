use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::storage::tasks::{Category, Filter, TaskStore};
use crate::theme::ThemeColors;

pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部标题栏（标题 + 任务统计）
pub fn render(frame: &mut Frame, area: Rect, store: &TaskStore, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(
        " ✓ Todo List",
        Style::default()
            .fg(colors.logo)
            .add_modifier(Modifier::BOLD),
    );

    let mut right = vec![Span::styled(
        format!("{} tasks", store.len()),
        Style::default().fg(colors.text),
    )];
    for category in Category::builtin() {
        let count = store.count(&Filter::Only(category.clone()));
        right.push(Span::styled("  ", Style::default()));
        right.push(Span::styled(
            format!("{} {}", category.icon(), count),
            Style::default().fg(colors.category_accent(&category)),
        ));
    }
    right.push(Span::raw(" "));

    // 计算中间填充空格
    let used_width = left.width() + right.iter().map(|s| s.width()).sum::<usize>();
    let padding = " ".repeat((inner_area.width as usize).saturating_sub(used_width));

    let mut spans = vec![left, Span::raw(padding)];
    spans.extend(right);

    frame.render_widget(Paragraph::new(Line::from(spans)), inner_area);
}
