use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use activity_board::{
    app::{AppState, Mode, LOAD_FAILED_TEXT},
    ui::view::{CardView, ListView, LOADING_TEXT},
};

pub fn render(f: &mut Frame, app: &AppState, list: &ListView, area: Rect) {
    let mut lines = Vec::new();
    let mut focused_line = 0;

    match list {
        ListView::Loading => {
            lines.push(Line::from(Span::styled(LOADING_TEXT, Style::default().fg(app.theme.muted))));
        }
        ListView::Failed => {
            lines.push(Line::from(Span::styled(LOAD_FAILED_TEXT, Style::default().fg(app.theme.error))));
        }
        ListView::Cards(cards) if cards.is_empty() => {
            lines.push(Line::from(Span::styled("No activities", Style::default().fg(app.theme.muted))));
        }
        ListView::Cards(cards) => {
            for card in cards {
                push_card(&mut lines, &mut focused_line, card, app);
            }
            lines.push(Line::from(vec![
                Span::styled("j/k", Style::default().fg(app.theme.title)),
                Span::raw(" = Navigate | "),
                Span::styled("x", Style::default().fg(app.theme.error)),
                Span::raw(" = Remove | "),
                Span::styled("a", Style::default().fg(app.theme.success)),
                Span::raw(" = Sign up"),
            ]));
        }
    }

    // Keep the focused row on screen.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = focused_line.saturating_sub(visible.saturating_sub(1)) as u16;

    let border_style = if matches!(app.mode, Mode::Browse) {
        Style::default().fg(app.theme.title)
    } else {
        Style::default()
    };

    let content = Paragraph::new(lines)
        .block(Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Activities "))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(content, area);
}

fn push_card<'a>(lines: &mut Vec<Line<'a>>, focused_line: &mut usize, card: &'a CardView, app: &AppState) {
    let theme = &app.theme;
    let selected = Style::default().bg(theme.selected_bg).fg(theme.selected_fg).add_modifier(Modifier::BOLD);

    if card.focused {
        *focused_line = lines.len();
    }
    let cursor = if card.focused { ">" } else { " " };
    let title_style = if card.focused {
        selected
    } else {
        Style::default().fg(theme.card_title).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::styled(cursor, Style::default().fg(theme.selected_bg)),
        Span::styled(card.title.as_str(), title_style),
    ]));

    for text in card.description.lines() {
        lines.push(Line::from(vec![Span::raw("  "), Span::raw(text)]));
    }

    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("Schedule: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(card.schedule.as_str(), Style::default().fg(theme.schedule)),
    ]));

    let spots_color = if card.full { theme.spots_full } else { theme.spots_open };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("Availability: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("{} spots left", card.spots_left), Style::default().fg(spots_color)),
    ]));

    if !card.participants.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("Participants:", Style::default().fg(theme.section).add_modifier(Modifier::BOLD)),
        ]));
        for participant in &card.participants {
            if participant.focused {
                *focused_line = lines.len();
            }
            let (email_style, remove_style) = if participant.focused {
                (selected, selected.fg(theme.error))
            } else {
                (Style::default(), Style::default().fg(theme.muted))
            };
            lines.push(Line::from(vec![
                Span::raw("    • "),
                Span::styled(participant.email.as_str(), email_style),
                Span::raw(" "),
                Span::styled("[×]", remove_style),
            ]));
        }
    }

    lines.push(Line::from(""));
}
