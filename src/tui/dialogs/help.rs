use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use activity_board::{app::AppState, ui::theme::Theme};

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 56.min(area.width);
    let help_height = 24.min(area.height);
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let help_text = help_text(&app.theme);

    let help_paragraph = Paragraph::new(help_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Help "))
        .alignment(Alignment::Left)
        .scroll((app.help_scroll as u16, 0));

    f.render_widget(help_paragraph, help_area);
}

pub fn help_text(theme: &Theme) -> Vec<Line<'static>> {
    let section = |title: &'static str| {
        Line::from(vec![Span::styled(title, Style::default().fg(theme.section))])
    };

    vec![
        Line::from(vec![Span::styled("Activity Board Help", Style::default().fg(theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        section("Board:"),
        Line::from("  j/k      - Move between cards and participants"),
        Line::from("  J/K      - Next/previous activity"),
        Line::from("  x / Del  - Remove focused participant"),
        Line::from("  r        - Reload activities"),
        Line::from(""),
        section("Sign Up:"),
        Line::from("  a / s    - Open the form for the focused activity"),
        Line::from("  Tab      - Switch between email and activity"),
        Line::from("  ←/→      - Change the selected activity"),
        Line::from("  Enter    - Submit"),
        Line::from("  Esc      - Back to the board"),
        Line::from(""),
        section("Commands:"),
        Line::from("  :reload            - Reload activities"),
        Line::from("  :signup [activity] - Open the form"),
        Line::from("  :theme <name>      - Switch colour theme"),
        Line::from("  :q                 - Quit"),
        Line::from(""),
        Line::from(vec![Span::styled("Press q or Esc to close", Style::default().fg(theme.muted))]),
    ]
}
