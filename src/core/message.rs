use crate::utils::input::sanitize_display_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn is_user(self) -> bool {
        self == Sender::User
    }
}

/// One transcript bubble. Content is stripped of control characters at
/// construction so nothing a user types or a server returns can smuggle
/// terminal control sequences into the rendered transcript.
#[derive(Debug, Clone)]
pub struct Message {
    pub sender: Sender,
    pub content: String,
}

impl Message {
    pub fn new(sender: Sender, content: impl AsRef<str>) -> Self {
        Self {
            sender,
            content: sanitize_display_text(content.as_ref()),
        }
    }

    pub fn user(content: impl AsRef<str>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn bot(content: impl AsRef<str>) -> Self {
        Self::new(Sender::Bot, content)
    }

    pub fn is_user(&self) -> bool {
        self.sender.is_user()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_senders() {
        assert!(Message::user("hi").is_user());
        assert!(!Message::bot("hi").is_user());
    }

    #[test]
    fn markup_stays_literal() {
        let msg = Message::user("<script>alert(1)</script>");
        assert_eq!(msg.content, "<script>alert(1)</script>");
    }

    #[test]
    fn control_sequences_are_stripped() {
        let msg = Message::bot("red \x1b[31mtext\x1b[0m\x07");
        assert_eq!(msg.content, "red [31mtext[0m");
    }
}
