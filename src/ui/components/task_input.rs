//! New task 输入行

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::storage::tasks::Category;
use crate::theme::ThemeColors;

use super::dialog_utils::truncate_start;

pub const TASK_INPUT_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "✍ What needs to be done?";

/// 渲染输入框和分类选择器
pub fn render(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    category: &Category,
    editing: bool,
    colors: &ThemeColors,
) {
    let border = if editing { colors.highlight } else { colors.border };
    let block = Block::default()
        .title(" New Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, category_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).areas(inner_area);

    // 渲染输入内容: " {input}█"
    let text_line = if input.is_empty() && !editing {
        Line::from(Span::styled(
            format!(" {}", PLACEHOLDER),
            Style::default().fg(colors.muted),
        ))
    } else {
        let visible = truncate_start(input, (text_area.width as usize).saturating_sub(3));
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(visible, Style::default().fg(colors.text)),
        ];
        if editing {
            spans.push(Span::styled("█", Style::default().fg(colors.highlight))); // 光标
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(text_line), text_area);

    let category_line = Line::from(vec![
        Span::styled(
            format!("{} {}", category.icon(), category.label()),
            Style::default()
                .fg(colors.category_accent(category))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▾", Style::default().fg(colors.muted)),
    ]);
    frame.render_widget(Paragraph::new(category_line), category_area);
}
