use crossterm::event::KeyCode;

use crate::app::{Action, AppState, FormField, Mode};

const MAX_EMAIL_LEN: usize = 254;

pub fn handle_key(key: KeyCode, state: &mut AppState) -> Option<Action> {
    match key {
        KeyCode::Esc => {
            state.mode = Mode::Browse;
        }
        KeyCode::Enter => return state.submit_signup(),
        KeyCode::Tab => state.form.next_field(),
        KeyCode::BackTab => state.form.prev_field(),
        KeyCode::Right => state.select.select_next(),
        KeyCode::Left => state.select.select_prev(),
        _ => match state.form.active_field {
            FormField::Email => edit_email(key, state),
            FormField::Activity => edit_selection(key, state),
        },
    }
    None
}

fn edit_email(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Backspace => {
            state.form.email.pop();
        }
        KeyCode::Char(c) if !c.is_whitespace() => {
            if state.form.email.len() < MAX_EMAIL_LEN {
                state.form.email.push(c);
            }
        }
        _ => return,
    }
    state.form.validation = None;
}

fn edit_selection(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('j') | KeyCode::Down => state.select.select_next(),
        KeyCode::Char('k') | KeyCode::Up => state.select.select_prev(),
        _ => return,
    }
    state.form.validation = None;
}
