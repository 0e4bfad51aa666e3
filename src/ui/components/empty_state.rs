use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::storage::tasks::Filter;
use crate::theme::ThemeColors;

/// 渲染空状态（带提示文字）
pub fn render(frame: &mut Frame, area: Rect, filter: &Filter, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 垂直居中
    let [_, text_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(inner_area);

    let title = match filter {
        Filter::All => "No tasks yet".to_string(),
        Filter::Only(category) => format!("No {} tasks", category.label()),
    };

    let lines = vec![
        Line::from(Span::styled(title, Style::default().fg(colors.text))),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.muted)),
            Span::styled("i", Style::default().fg(colors.highlight)),
            Span::styled(" to add one, ", Style::default().fg(colors.muted)),
            Span::styled("o", Style::default().fg(colors.highlight)),
            Span::styled(" to load a list", Style::default().fg(colors.muted)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );
}
