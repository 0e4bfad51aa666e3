use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, InputMode};

use super::components::{
    empty_state, filter_tabs, footer, header, help_panel, path_dialog, task_input, task_list,
    toast,
};

/// 渲染主界面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, input_area, tabs_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(task_input::TASK_INPUT_HEIGHT),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    header::render(frame, header_area, &app.store, colors);

    task_input::render(
        frame,
        input_area,
        &app.input,
        &app.category,
        app.mode == InputMode::Editing,
        colors,
    );

    filter_tabs::render(frame, tabs_area, &app.filter, &app.store, colors);

    let rows = app.visible_tasks();
    if rows.is_empty() {
        empty_state::render(frame, list_area, &app.filter, colors);
    } else {
        task_list::render(frame, list_area, &rows, app.list_state.selected(), colors);
    }

    footer::render(frame, footer_area, app.mode, !rows.is_empty(), colors);

    // 弹窗层
    if let Some(prompt) = &app.path_prompt {
        path_dialog::render(frame, prompt, colors);
    }

    if app.show_help {
        help_panel::render(frame, colors);
    }

    if let Some(t) = &app.toast {
        toast::render(frame, t, colors);
    }
}
