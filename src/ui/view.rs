//! Typed view tree built from [`AppState`] on every frame.
//!
//! Server-supplied strings only ever land in text fields of these nodes, so a
//! name or email can never change the structure of what gets drawn. The
//! terminal layer and the plain-text listing both render from this tree.

use crate::activity::{Activity, ActivityBoard};
use crate::app::{AppState, FocusTarget, ListStatus, MessageKind, LOAD_FAILED_TEXT, SELECT_PLACEHOLDER};
use crate::ui::markup::plain_text;

pub const LOADING_TEXT: &str = "Loading activities...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub list: ListView,
    pub select: SelectView,
    pub message: Option<MessageView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Failed,
    Cards(Vec<CardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub full: bool,
    pub participants: Vec<ParticipantView>,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantView {
    pub email: String,
    pub remove: RemoveControl,
    pub focused: bool,
}

/// Data carried by a removal control; the dispatcher reads it back when the
/// control is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveControl {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub kind: MessageKind,
    pub text: String,
}

impl CardView {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            title: activity.name.clone(),
            description: plain_text(&activity.description),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            full: activity.is_full(),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantView {
                    email: email.clone(),
                    remove: RemoveControl {
                        activity: activity.name.clone(),
                        email: email.clone(),
                    },
                    focused: false,
                })
                .collect(),
            focused: false,
        }
    }

    pub fn schedule_label(&self) -> String {
        format!("Schedule: {}", self.schedule)
    }

    pub fn availability_label(&self) -> String {
        format!("Availability: {} spots left", self.spots_left)
    }
}

pub fn build_cards(board: &ActivityBoard) -> Vec<CardView> {
    board.iter().map(CardView::from_activity).collect()
}

impl BoardView {
    pub fn build(app: &AppState) -> Self {
        let list = match app.list_status {
            ListStatus::Loading => ListView::Loading,
            ListStatus::Failed => ListView::Failed,
            ListStatus::Ready => {
                let mut cards = build_cards(&app.board);
                mark_focus(&mut cards, app.focused_target());
                ListView::Cards(cards)
            }
        };

        let selected = app.select.selected_index();
        let options = std::iter::once((SELECT_PLACEHOLDER.to_string(), String::new()))
            .chain(app.select.options().iter().map(|name| (name.clone(), name.clone())))
            .enumerate()
            .map(|(index, (label, value))| SelectOption {
                label,
                value,
                selected: index == selected,
            })
            .collect();

        let message = app.message.visible_message().map(|m| MessageView {
            kind: m.kind,
            text: m.text.clone(),
        });

        Self {
            list,
            select: SelectView { options },
            message,
        }
    }

    pub fn cards(&self) -> &[CardView] {
        match &self.list {
            ListView::Cards(cards) => cards,
            _ => &[],
        }
    }
}

fn mark_focus(cards: &mut [CardView], target: Option<FocusTarget>) {
    match target {
        Some(FocusTarget::Card { activity }) => {
            if let Some(card) = cards.get_mut(activity) {
                card.focused = true;
            }
        }
        Some(FocusTarget::Participant { activity, participant }) => {
            if let Some(row) = cards
                .get_mut(activity)
                .and_then(|card| card.participants.get_mut(participant))
            {
                row.focused = true;
            }
        }
        None => {}
    }
}

/// Plain-text rendering of the list, used by the non-interactive listing.
pub fn render_plain(list: &ListView) -> String {
    let cards = match list {
        ListView::Loading => return LOADING_TEXT.to_string(),
        ListView::Failed => return LOAD_FAILED_TEXT.to_string(),
        ListView::Cards(cards) => cards,
    };

    if cards.is_empty() {
        return "No activities.".to_string();
    }

    let mut lines = Vec::new();
    for card in cards {
        lines.push(card.title.clone());
        lines.extend(card.description.lines().map(|l| format!("  {}", l)));
        lines.push(format!("  {}", card.schedule_label()));
        lines.push(format!("  {}", card.availability_label()));
        if !card.participants.is_empty() {
            lines.push("  Participants:".to_string());
            lines.extend(card.participants.iter().map(|p| format!("    - {}", p.email)));
        }
        lines.push(String::new());
    }

    lines.join("\n").trim_end().to_string()
}
