use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::storage::tasks::{Filter, TaskStore};
use crate::theme::ThemeColors;

/// 渲染过滤 Tab 栏，每个 Tab 显示匹配数量
pub fn render(
    frame: &mut Frame,
    area: Rect,
    current: &Filter,
    store: &TaskStore,
    colors: &ThemeColors,
) {
    let filters = Filter::all();

    let mut spans = vec![Span::styled(" Filter by: ", Style::default().fg(colors.muted))];

    for (i, filter) in filters.iter().enumerate() {
        let label = format!("  {} ({})  ", filter.label(), store.count(filter));

        if filter == current {
            // 选中的 Tab: 背景高亮块
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(colors.tab_active_fg)
                    .bg(colors.tab_active_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(colors.muted)));
        }

        if i < filters.len() - 1 {
            spans.push(Span::raw(" "));
        }
    }

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
