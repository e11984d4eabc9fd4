use crossterm::event::KeyCode;

use crate::app::{Action, AppState, Mode};

/// Single dispatcher for the whole board. Removal is resolved from the data
/// carried by whichever control currently has focus.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => state.move_focus_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_focus_up(),
        KeyCode::Char('J') | KeyCode::PageDown => state.focus_next_card(),
        KeyCode::Char('K') | KeyCode::PageUp => state.focus_prev_card(),
        KeyCode::Char('g') | KeyCode::Home => state.focus = 0,
        KeyCode::Char('x') | KeyCode::Delete => return remove_focused(state),
        KeyCode::Char('a') | KeyCode::Char('s') | KeyCode::Enter => state.open_form(),
        KeyCode::Char('r') => return Some(Action::Reload),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => state.show_help = true,
        KeyCode::Char('q') => return Some(Action::Quit),
        _ => {}
    }
    None
}

fn remove_focused(state: &AppState) -> Option<Action> {
    let (activity, email) = state.focused_removal()?;
    tracing::info!("Removal requested for {} in {}", email, activity);
    Some(Action::RemoveParticipant { activity, email })
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}
