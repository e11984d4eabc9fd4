pub mod form;
pub mod message;

use std::time::Instant;

use chrono::{DateTime, Local};

use crate::activity::ActivityBoard;
use crate::api::{ApiError, BoardEvent, SignupRequest};
use crate::ui::theme::Theme;

pub use form::{ActivitySelect, FormError, FormField, SignupForm, SELECT_PLACEHOLDER};
pub use message::{Message, MessageArea, MessageKind, MESSAGE_DISPLAY_DURATION};

pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_FALLBACK_ERROR: &str = "An error occurred";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Browse,
    Form,
    Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Loading,
    Ready,
    Failed,
}

/// Something the session has to carry out on behalf of the user or the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Reload,
    Submit(SignupRequest),
    RemoveParticipant { activity: String, email: String },
    Quit,
}

/// A focusable spot on the board: a card, or the removal control of one
/// participant inside a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    Card { activity: usize },
    Participant { activity: usize, participant: usize },
}

pub struct AppState {
    pub mode: Mode,
    pub board: ActivityBoard,
    pub list_status: ListStatus,
    pub select: ActivitySelect,
    pub form: SignupForm,
    pub message: MessageArea,
    pub focus: usize,
    pub command_buffer: String,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
    pub server_url: String,
    pub last_updated: Option<DateTime<Local>>,
    load_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Browse,
            board: ActivityBoard::default(),
            list_status: ListStatus::Loading,
            select: ActivitySelect::new(),
            form: SignupForm::new(),
            message: MessageArea::new(),
            focus: 0,
            command_buffer: String::new(),
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
            server_url: String::new(),
            last_updated: None,
            load_seq: 0,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }

    /// Issues the sequence number for a new activity load. Only the
    /// completion carrying the newest number is allowed to update the view.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.load_seq
    }

    /// Scrolls the help overlay one line down, stopping on its last line.
    pub fn scroll_help_down(&mut self, line_count: usize) {
        if self.help_scroll + 1 < line_count {
            self.help_scroll += 1;
        }
    }

    /// Applies a finished request and returns the follow-up actions it causes.
    pub fn apply(&mut self, event: BoardEvent, now: Instant) -> Vec<Action> {
        match event {
            BoardEvent::ActivitiesLoaded { seq, result } => {
                self.apply_load(seq, result);
                Vec::new()
            }
            BoardEvent::SignupFinished { request, result } => match result {
                Ok(receipt) => {
                    tracing::info!("Signed up {} for {}", request.email, request.activity);
                    self.message.show(MessageKind::Success, receipt.message, now);
                    self.reset_form();
                    vec![Action::Reload]
                }
                Err(e) if e.is_rejection() => {
                    tracing::warn!("Signup for {} rejected: {}", request.activity, e);
                    let text = e.detail().unwrap_or(SIGNUP_FALLBACK_ERROR).to_string();
                    self.message.show(MessageKind::Error, text, now);
                    Vec::new()
                }
                Err(e) => {
                    tracing::error!("Error signing up: {}", e);
                    self.message.show(MessageKind::Error, SIGNUP_FAILED_TEXT, now);
                    Vec::new()
                }
            },
            BoardEvent::RemovalFinished { activity, email, result } => match result {
                Ok(()) => {
                    tracing::info!("Removed {} from {}", email, activity);
                    vec![Action::Reload]
                }
                Err(e) => {
                    tracing::error!("Failed to remove {} from {}: {}", email, activity, e);
                    Vec::new()
                }
            },
        }
    }

    fn apply_load(&mut self, seq: u64, result: Result<ActivityBoard, ApiError>) {
        if seq != self.load_seq {
            tracing::debug!("Discarding stale activity load #{} (latest #{})", seq, self.load_seq);
            return;
        }

        match result {
            Ok(board) => {
                self.select.replace_options(board.names());
                self.board = board;
                self.list_status = ListStatus::Ready;
                self.last_updated = Some(Local::now());
                self.clamp_focus();
            }
            Err(e) => {
                tracing::error!("Error fetching activities: {}", e);
                self.board = ActivityBoard::default();
                self.list_status = ListStatus::Failed;
                self.focus = 0;
            }
        }
    }

    /// Validates the form. On success returns the submit action; otherwise
    /// records the validation hint and sends nothing.
    pub fn submit_signup(&mut self) -> Option<Action> {
        match self.form.build_request(&self.select) {
            Ok(request) => {
                self.form.validation = None;
                Some(Action::Submit(request))
            }
            Err(e) => {
                tracing::debug!("Signup form incomplete: {:?}", e);
                self.form.validation = Some(e);
                None
            }
        }
    }

    pub fn reset_form(&mut self) {
        self.form.clear();
        self.select.reset();
    }

    pub fn open_form(&mut self) {
        if let Some(name) = self.focused_activity_name().map(str::to_string) {
            self.select.select_by_name(&name);
        }
        self.mode = Mode::Form;
    }

    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        let mut targets = Vec::new();
        for (activity, details) in self.board.iter().enumerate() {
            targets.push(FocusTarget::Card { activity });
            for participant in 0..details.participants.len() {
                targets.push(FocusTarget::Participant { activity, participant });
            }
        }
        targets
    }

    pub fn focused_target(&self) -> Option<FocusTarget> {
        self.focus_targets().into_iter().nth(self.focus)
    }

    pub fn focused_activity_name(&self) -> Option<&str> {
        let activity = match self.focused_target()? {
            FocusTarget::Card { activity } | FocusTarget::Participant { activity, .. } => activity,
        };
        self.board.get_index(activity).map(|a| a.name.as_str())
    }

    /// Activity name and email carried by the focused removal control.
    pub fn focused_removal(&self) -> Option<(String, String)> {
        match self.focused_target()? {
            FocusTarget::Participant { activity, participant } => {
                let details = self.board.get_index(activity)?;
                let email = details.participants.get(participant)?;
                Some((details.name.clone(), email.clone()))
            }
            FocusTarget::Card { .. } => None,
        }
    }

    pub fn move_focus_down(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 && self.focus < count - 1 {
            self.focus += 1;
        }
    }

    pub fn move_focus_up(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn focus_next_card(&mut self) {
        let targets = self.focus_targets();
        if let Some(offset) = targets
            .iter()
            .skip(self.focus + 1)
            .position(|t| matches!(t, FocusTarget::Card { .. }))
        {
            self.focus += offset + 1;
        }
    }

    pub fn focus_prev_card(&mut self) {
        let targets = self.focus_targets();
        if let Some(index) = targets[..self.focus.min(targets.len())]
            .iter()
            .rposition(|t| matches!(t, FocusTarget::Card { .. }))
        {
            self.focus = index;
        }
    }

    fn clamp_focus(&mut self) {
        let count = self.focus_targets().len();
        self.focus = self.focus.min(count.saturating_sub(1));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
