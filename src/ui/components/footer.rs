use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::InputMode;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, mode: InputMode, has_items: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(mode, has_items);

    let mut spans = vec![Span::raw("  ")];

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn get_shortcuts(mode: InputMode, has_items: bool) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Editing => vec![
            ("Enter", "add"),
            ("Tab", "category"),
            ("Esc", "done"),
        ],
        InputMode::Normal if has_items => vec![
            ("i", "new"),
            ("d", "remove"),
            ("f", "filter"),
            ("s", "save"),
            ("o", "load"),
            ("?", "help"),
            ("q", "quit"),
        ],
        InputMode::Normal => vec![
            ("i", "new"),
            ("f", "filter"),
            ("o", "load"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_hint_only_with_items() {
        let has = |items| {
            get_shortcuts(InputMode::Normal, items)
                .iter()
                .any(|(k, _)| *k == "d")
        };
        assert!(has(true));
        assert!(!has(false));
        assert_eq!(get_shortcuts(InputMode::Editing, true)[0], ("Enter", "add"));
    }
}
