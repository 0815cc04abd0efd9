//! The ordered list of chat messages shown to the user.

use crate::types::{ChatMessage, ImageAttachment, Role};

/// Append-only message sequence tied to one token identity.
///
/// A send is two-phase: `push_user` appends the optimistic local echo
/// synchronously and hands back the epoch in force at that moment; `settle`
/// appends the resolved outcome later, but only if the epoch still matches.
/// `reset` bumps the epoch, so replies dispatched under a previous identity
/// (login, logout, login-as-someone-else) land nowhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<ChatMessage>,
    epoch: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Phase one: append the user entry before the network result is known.
    /// Returns the epoch the eventual settlement must present.
    pub fn push_user(&mut self, text: impl Into<String>, image: Option<ImageAttachment>) -> u64 {
        self.entries.push(ChatMessage {
            role: Role::User,
            text: text.into(),
            image,
        });
        self.epoch
    }

    /// Phase two: append exactly one terminal entry for a completed send.
    /// A stale epoch means the token identity changed while the request was
    /// in flight; the outcome is discarded, never reordered in.
    pub fn settle(&mut self, issued_epoch: u64, outcome: Result<String, String>) {
        if issued_epoch != self.epoch {
            return;
        }
        let entry = match outcome {
            Ok(text) => ChatMessage {
                role: Role::Assistant,
                text,
                image: None,
            },
            Err(text) => ChatMessage {
                role: Role::Error,
                text,
                image: None,
            },
        };
        self.entries.push(entry);
    }

    /// The token identity changed: drop every entry and invalidate whatever
    /// is still in flight.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_send_grows_transcript_by_two() {
        let mut transcript = Transcript::new();

        let epoch = transcript.push_user("hello", None);
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.entries()[0].role, Role::User);
        assert_eq!(transcript.entries()[0].text, "hello");

        transcript.settle(epoch, Ok("hi there".to_string()));
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[1].role, Role::Assistant);
        assert_eq!(transcript.entries()[1].text, "hi there");
    }

    #[test]
    fn test_failed_send_appends_error_entry() {
        let mut transcript = Transcript::new();

        let epoch = transcript.push_user("hello", None);
        transcript.settle(epoch, Err("server error".to_string()));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[1].role, Role::Error);
        assert_eq!(transcript.entries()[1].text, "server error");
    }

    #[test]
    fn test_reset_clears_entries() {
        let mut transcript = Transcript::new();
        let epoch = transcript.push_user("hello", None);
        transcript.settle(epoch, Ok("hi".to_string()));

        transcript.reset();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_stale_settlement_is_discarded() {
        let mut transcript = Transcript::new();
        let epoch = transcript.push_user("hello", None);

        // Identity changes while the request is outstanding.
        transcript.reset();
        transcript.settle(epoch, Ok("late reply".to_string()));

        assert!(transcript.is_empty());
    }

    #[test]
    fn test_settlement_after_relogin_does_not_leak_across_identities() {
        let mut transcript = Transcript::new();
        let stale = transcript.push_user("as user one", None);
        transcript.reset();

        let fresh = transcript.push_user("as user two", None);
        transcript.settle(stale, Ok("meant for user one".to_string()));
        assert_eq!(transcript.len(), 1);

        transcript.settle(fresh, Ok("meant for user two".to_string()));
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[1].text, "meant for user two");
    }

    #[test]
    fn test_image_only_message_allowed() {
        let mut transcript = Transcript::new();
        let image = ImageAttachment {
            name: "photo.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        transcript.push_user("", Some(image));

        assert_eq!(transcript.entries()[0].text, "");
        assert!(transcript.entries()[0].image.is_some());
    }
}
