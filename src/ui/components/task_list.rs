use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::storage::tasks::Task;
use crate::theme::ThemeColors;

use super::dialog_utils::truncate;

/// 渲染任务列表，按分类着色
pub fn render(
    frame: &mut Frame,
    area: Rect,
    rows: &[(usize, &Task)],
    selected: Option<usize>,
    colors: &ThemeColors,
) {
    // 文本列宽：边框 2 + 选择器 2 + 图标 3 + 分类标签
    let text_width = (area.width as usize).saturating_sub(20);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, (_, task))| {
            let is_selected = selected == Some(i);
            let selector = if is_selected { "❯ " } else { "  " };
            let accent = colors.category_accent(&task.category);

            let text_style = if is_selected {
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            let line = Line::from(vec![
                Span::styled(selector, Style::default().fg(colors.highlight)),
                Span::styled(format!("{} ", task.category.icon()), Style::default().fg(accent)),
                Span::styled(truncate(&task.text, text_width), text_style),
                Span::styled(
                    format!("  {}", task.category.label()),
                    Style::default().fg(accent),
                ),
            ]);

            ListItem::new(line)
                .style(Style::default().bg(colors.category_background(&task.category)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .highlight_style(Style::default().bg(colors.bg_secondary));

    let mut state = ListState::default();
    state.select(selected);

    frame.render_stateful_widget(list, area, &mut state);
}
