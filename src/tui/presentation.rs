use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use activity_board::{
    app::{AppState, MessageKind, Mode},
    ui::view::BoardView,
};
use crate::tui::{board_panel, dialogs, form_panel};

pub fn ui(f: &mut Frame, app: &AppState) {
    let view = BoardView::build(app);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(main_chunks[1]);

    let title_text = match &app.last_updated {
        Some(at) => format!("Activity Board - {} - updated {}", app.server_url, at.format("%H:%M:%S")),
        None => format!("Activity Board - {}", app.server_url),
    };

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    board_panel::render(f, app, &view.list, content_chunks[0]);
    form_panel::render(f, app, &view.select, content_chunks[1]);

    let (status_text, status_color, alignment) = if matches!(app.mode, Mode::Command) {
        (app.command_buffer.clone(), app.theme.status_bar, Alignment::Left)
    } else if let Some(message) = &view.message {
        let color = match message.kind {
            MessageKind::Success => app.theme.success,
            MessageKind::Error => app.theme.error,
        };
        (message.text.clone(), color, Alignment::Center)
    } else {
        (
            format!("Activities: {} | Press 'q' to quit, '?' for help", app.board.len()),
            app.theme.status_bar,
            Alignment::Center,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(alignment)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);

    if app.show_help {
        dialogs::help::render(f, app);
    }
}
