use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a signup outcome stays on screen.
pub const MESSAGE_DISPLAY_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

/// Message line under the board: hidden, or showing one success/error text.
///
/// Every `show` queues its own hide deadline and earlier deadlines are never
/// cancelled, so a second message shown within five seconds of the first is
/// hidden when the first one's deadline passes.
#[derive(Debug, Clone, Default)]
pub struct MessageArea {
    current: Option<Message>,
    visible: bool,
    pending_hides: VecDeque<Instant>,
}

impl MessageArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>, now: Instant) {
        self.current = Some(Message { kind, text: text.into() });
        self.visible = true;
        self.pending_hides.push_back(now + MESSAGE_DISPLAY_DURATION);
    }

    /// Applies every hide whose deadline is at or before `now`.
    /// Returns true when the area went from shown to hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut hidden = false;
        while let Some(deadline) = self.pending_hides.front() {
            if *deadline > now {
                break;
            }
            self.pending_hides.pop_front();
            if self.visible {
                self.visible = false;
                hidden = true;
            }
        }
        hidden
    }

    pub fn visible_message(&self) -> Option<&Message> {
        if self.visible {
            self.current.as_ref()
        } else {
            None
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_hides.front().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let area = MessageArea::new();
        assert!(!area.is_visible());
        assert!(area.visible_message().is_none());
        assert!(area.next_deadline().is_none());
    }

    #[test]
    fn shown_message_is_visible_with_kind() {
        let mut area = MessageArea::new();
        area.show(MessageKind::Success, "Signed up", Instant::now());

        let message = area.visible_message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, "Signed up");
    }

    #[test]
    fn hides_exactly_at_five_seconds() {
        let start = Instant::now();
        let mut area = MessageArea::new();
        area.show(MessageKind::Error, "nope", start);

        assert!(!area.tick(start + Duration::from_millis(4999)));
        assert!(area.is_visible());

        assert!(area.tick(start + Duration::from_millis(5000)));
        assert!(!area.is_visible());
        assert!(area.next_deadline().is_none());
    }

    #[test]
    fn earlier_hide_still_fires_for_overlapping_messages() {
        let start = Instant::now();
        let mut area = MessageArea::new();
        area.show(MessageKind::Success, "first", start);
        area.show(MessageKind::Error, "second", start + Duration::from_secs(3));

        assert!(area.tick(start + Duration::from_secs(5)));
        assert!(area.visible_message().is_none());

        assert_eq!(area.next_deadline(), Some(start + Duration::from_secs(8)));
        assert!(!area.tick(start + Duration::from_secs(8)));
        assert!(area.next_deadline().is_none());
    }

    #[test]
    fn message_shown_after_hide_gets_fresh_deadline() {
        let start = Instant::now();
        let mut area = MessageArea::new();
        area.show(MessageKind::Success, "first", start);
        area.tick(start + Duration::from_secs(6));

        area.show(MessageKind::Error, "second", start + Duration::from_secs(7));

        assert!(area.is_visible());
        assert_eq!(area.next_deadline(), Some(start + Duration::from_secs(12)));
    }
}
