use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use activity_board::{
    app::{AppState, FormField, Mode},
    ui::view::SelectView,
};

pub fn render(f: &mut Frame, app: &AppState, select: &SelectView, area: Rect) {
    let theme = &app.theme;
    let editing = matches!(app.mode, Mode::Form);
    let form = &app.form;

    let label_style = |field: FormField| {
        if editing && form.active_field == field {
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        }
    };

    let cursor = if editing && form.active_field == FormField::Email { "_" } else { "" };

    let mut form_text = vec![
        Line::from(vec![
            Span::styled("Student Email: ", label_style(FormField::Email)),
            Span::raw(form.email.as_str()),
            Span::styled(cursor, Style::default().fg(theme.title)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Activity:", label_style(FormField::Activity))]),
    ];

    for option in &select.options {
        let marker = if option.selected { "(•) " } else { "( ) " };
        let style = if option.selected {
            Style::default().fg(theme.selected_fg).bg(theme.selected_bg)
        } else if option.value.is_empty() {
            Style::default().fg(theme.muted)
        } else {
            Style::default()
        };
        form_text.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(marker, style),
            Span::styled(option.label.as_str(), style),
        ]));
    }

    form_text.push(Line::from(""));

    if let Some(error) = &form.validation {
        form_text.push(Line::from(Span::styled(error.hint(), Style::default().fg(theme.error))));
        form_text.push(Line::from(""));
    }

    if editing {
        form_text.push(Line::from(vec![
            Span::styled("Tab", Style::default().fg(theme.title)),
            Span::raw(" = Next field | "),
            Span::styled("←/→", Style::default().fg(theme.title)),
            Span::raw(" = Activity | "),
            Span::styled("Enter", Style::default().fg(theme.success)),
            Span::raw(" = Sign up | "),
            Span::styled("Esc", Style::default().fg(theme.error)),
            Span::raw(" = Back"),
        ]));
    } else {
        form_text.push(Line::from(vec![
            Span::styled("a", Style::default().fg(theme.success)),
            Span::raw(" = Fill in the form"),
        ]));
    }

    let border_style = if editing {
        Style::default().fg(theme.title)
    } else {
        Style::default()
    };

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Sign Up for an Activity "))
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, area);
}
