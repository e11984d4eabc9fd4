use crossterm::event::KeyCode;

use crate::app::{Action, AppState, Mode};
use crate::ui::theme::Theme;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Reload,
    Signup(Option<String>),
    Theme(String),
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    let Some(name) = parts.first() else {
        return Command::Error("Empty command".to_string());
    };

    match *name {
        "q" | "quit" => Command::Quit,
        "r" | "reload" => Command::Reload,
        "help" => Command::Help,
        "signup" => {
            if parts.len() < 2 {
                Command::Signup(None)
            } else {
                Command::Signup(Some(parts[1..].join(" ")))
            }
        }
        "theme" => match parts.get(1) {
            Some(theme) => Command::Theme(theme.to_string()),
            None => Command::Error("theme requires a theme name".to_string()),
        },
        other => Command::Error(format!("Unknown command: {}", other)),
    }
}

pub fn handle_key(key: KeyCode, state: &mut AppState) -> Option<Action> {
    match key {
        KeyCode::Enter => {
            let command = parse_command(&state.command_buffer);
            state.command_buffer.clear();
            state.mode = Mode::Browse;
            execute(command, state)
        }
        KeyCode::Esc => {
            state.command_buffer.clear();
            state.mode = Mode::Browse;
            None
        }
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                state.mode = Mode::Browse;
            }
            None
        }
        KeyCode::Char(c) => {
            state.command_buffer.push(c);
            None
        }
        _ => None,
    }
}

fn execute(command: Command, state: &mut AppState) -> Option<Action> {
    match command {
        Command::Quit => Some(Action::Quit),
        Command::Reload => Some(Action::Reload),
        Command::Help => {
            state.show_help = !state.show_help;
            None
        }
        Command::Theme(name) => {
            state.theme = Theme::get_by_name(&name);
            None
        }
        Command::Signup(activity) => {
            state.open_form();
            if let Some(name) = activity
                && !state.select.select_by_name(&name)
            {
                tracing::warn!("No activity named {}", name);
            }
            None
        }
        Command::Error(message) => {
            tracing::warn!("Command error: {}", message);
            None
        }
    }
}
