//! Save / Load 文件路径弹窗

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::PathPrompt;
use crate::theme::ThemeColors;

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint, truncate_start};

/// 渲染路径输入弹窗
pub fn render(frame: &mut Frame, prompt: &PathPrompt, colors: &ThemeColors) {
    let width = 64u16.min(frame.area().width.saturating_sub(4));
    let area = center_dialog(frame.area(), width, 7);
    let inner = render_dialog_frame(frame, area, prompt.title(), colors.highlight, colors);

    // 内部布局: 空行 + 输入行 + 空行 + 提示行
    let [_, input_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let label = "  File: ";
    let visible = truncate_start(
        &prompt.input,
        (input_area.width as usize).saturating_sub(label.len() + 2),
    );
    let input_line = Line::from(vec![
        Span::styled(label, Style::default().fg(colors.muted)),
        Span::styled(visible, Style::default().fg(colors.text)),
        Span::styled("█", Style::default().fg(colors.highlight)), // 光标
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    render_hint(
        frame,
        hint_area,
        &[("Enter", "confirm"), ("Esc", "cancel")],
        colors,
    );
}
