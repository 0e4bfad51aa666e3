//! 快捷键帮助面板

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

use super::dialog_utils::center_dialog;

const PANEL_WIDTH: u16 = 38;
const PANEL_HEIGHT: u16 = 26;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let panel_area = center_dialog(frame.area(), PANEL_WIDTH, PANEL_HEIGHT);

    // 清除背景
    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let paragraph = Paragraph::new(build_help_lines(colors)).block(block);
    frame.render_widget(paragraph, panel_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Navigation", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("f / Tab", "Next filter", colors),
        key_line("F", "Previous filter", colors),
        Line::from(""),
        section_header("Tasks", colors),
        key_line("i / n / a", "New task", colors),
        key_line("Enter", "Add (while typing)", colors),
        key_line("Tab", "Category (while typing)", colors),
        key_line("c", "Next category", colors),
        key_line("d / x / Del", "Remove selected", colors),
        Line::from(""),
        section_header("File", colors),
        key_line("s", "Save list", colors),
        key_line("o / l", "Load list", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("t", "Cycle theme", colors),
        key_line("?", "Toggle help", colors),
        key_line("q / Ctrl+C", "Quit", colors),
        Line::from(""),
        Line::from(Span::styled(
            "  Esc to close",
            Style::default().fg(colors.muted),
        )),
    ]
}

/// 分组标题
fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

/// 快捷键行
fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:12}", key),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}
