use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use activity_board::{
    api::{BoardEvent, BoardSync},
    app::{Action, AppState, Mode},
    input::{browse_mode, command_mode, form_mode},
    storage::config::Config,
    ui::theme::Theme,
};
use crate::tui::{dialogs::help, presentation::ui};

const TICK: Duration = Duration::from_millis(100);

pub async fn run_tui(config: Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::get_by_name(&config.ui.theme);
    let mut app = AppState::new()
        .with_theme(theme)
        .with_server_url(config.server.base_url.clone());

    let sync = BoardSync::new(&config);
    let (tx, rx) = mpsc::unbounded_channel();

    let res = run_app(&mut terminal, &mut app, &sync, tx, rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Session ended with error: {:?}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    sync: &BoardSync,
    tx: UnboundedSender<BoardEvent>,
    mut rx: UnboundedReceiver<BoardEvent>,
) -> io::Result<()> {
    dispatch(Action::Reload, app, sync, &tx);

    loop {
        while let Ok(board_event) = rx.try_recv() {
            for follow_up in app.apply(board_event, Instant::now()) {
                if dispatch(follow_up, app, sync, &tx) {
                    return Ok(());
                }
            }
        }

        app.message.tick(Instant::now());

        terminal.draw(|f| ui(f, app))?;

        let now = Instant::now();
        let timeout = app
            .message
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now).min(TICK))
            .unwrap_or(TICK);

        if !event::poll(timeout)? {
            continue;
        }

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = handle_key(key.code, app)
            && dispatch(action, app, sync, &tx)
        {
            return Ok(());
        }
    }
}

fn handle_key(code: KeyCode, app: &mut AppState) -> Option<Action> {
    if app.show_help {
        handle_help_keys(code, app);
        return None;
    }

    match app.mode {
        Mode::Browse => browse_mode::handle_key(code, app),
        Mode::Form => form_mode::handle_key(code, app),
        Mode::Command => command_mode::handle_key(code, app),
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_help_down(help::help_text(&app.theme).len());
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

/// Starts the request behind `action` on its own task. Returns true on quit.
fn dispatch(
    action: Action,
    app: &mut AppState,
    sync: &BoardSync,
    tx: &UnboundedSender<BoardEvent>,
) -> bool {
    let sync = sync.clone();
    let tx = tx.clone();

    match action {
        Action::Quit => return true,
        Action::Reload => {
            let seq = app.begin_load();
            tokio::spawn(async move {
                let _ = tx.send(sync.load(seq).await);
            });
        }
        Action::Submit(request) => {
            tokio::spawn(async move {
                let _ = tx.send(sync.signup(request).await);
            });
        }
        Action::RemoveParticipant { activity, email } => {
            tokio::spawn(async move {
                let _ = tx.send(sync.remove(activity, email).await);
            });
        }
    }

    false
}
