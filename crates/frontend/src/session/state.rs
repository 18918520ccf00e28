//! Pure session state. Every user action and probe completion is a plain
//! state transition here, so the conversation flow is testable without a
//! DOM or a running backend; the reactive wrapper lives in the parent
//! module.

use contracts::chat::Message;
use contracts::documents::UploadedFile;
use contracts::health::HealthStatus;

/// Fixed user-facing text for a failed ask. Transport detail stays in the
/// console log and is never shown.
pub const ASK_ERROR: &str =
    "I'm having trouble connecting to the intelligence engine. Please try again later.";

#[derive(Debug, Clone)]
pub struct SessionState {
    /// Append-only, insertion-ordered conversation history.
    pub messages: Vec<Message>,
    /// Accepted documents, most recent first.
    pub files: Vec<UploadedFile>,
    pub is_uploading: bool,
    pub is_asking: bool,
    pub health: HealthStatus,
    /// Most recent failed operation; at most one at a time, cleared at the
    /// start of the next user action.
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            files: Vec::new(),
            is_uploading: false,
            is_asking: false,
            health: HealthStatus::offline(),
            error: None,
        }
    }
}

impl SessionState {
    /// Start an ask. Returns the question to send, or `None` when the
    /// input is blank or another ask is still in flight (the call is a
    /// no-op then). The text is trimmed only for the blank check; the user
    /// message keeps it as given, appended before the network call
    /// resolves, and a later failure never retracts it.
    pub fn begin_ask(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() || self.is_asking {
            return None;
        }
        self.error = None;
        self.messages.push(Message::user(text.to_string()));
        self.is_asking = true;
        Some(text.to_string())
    }

    /// Apply the outcome of the ask started by [`begin_ask`].
    ///
    /// [`begin_ask`]: SessionState::begin_ask
    pub fn finish_ask(&mut self, result: Result<String, String>) {
        match result {
            Ok(answer) => self.messages.push(Message::assistant(answer)),
            Err(detail) => {
                log::warn!("ask failed: {detail}");
                self.error = Some(ASK_ERROR.to_string());
            }
        }
        self.is_asking = false;
    }

    /// Start an upload. False when one is already in flight.
    pub fn begin_upload(&mut self) -> bool {
        if self.is_uploading {
            return false;
        }
        self.error = None;
        self.is_uploading = true;
        true
    }

    /// Apply the outcome of an upload: record the file and a feedback
    /// message on success, or an error naming the file on failure.
    pub fn finish_upload(&mut self, name: &str, size: u64, ok: bool) {
        if ok {
            self.files
                .insert(0, UploadedFile::new(name.to_string(), size));
            self.messages.push(Message::assistant(format!(
                "Successfully uploaded and indexed \"{name}\". You can now ask questions about its content."
            )));
        } else {
            self.error = Some(format!(
                "Failed to upload {name}. Please check the server status."
            ));
        }
        self.is_uploading = false;
    }

    /// Overwrite the health snapshot with a fresh observation. The last
    /// completed probe wins; `checked_at` never moves backwards.
    pub fn record_health(&mut self, online: bool) {
        self.health = HealthStatus::observed(online);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::chat::Role;

    #[test]
    fn test_ask_appends_user_then_assistant() {
        let mut s = SessionState::default();
        let sent = s.begin_ask("why did the pod restart?").unwrap();
        assert_eq!(sent, "why did the pod restart?");
        assert!(s.is_asking);

        s.finish_ask(Ok("OOM killer terminated it.".to_string()));
        assert!(!s.is_asking);
        assert_eq!(s.messages.len(), 2);
        assert_eq!(s.messages[0].role, Role::User);
        assert_eq!(s.messages[0].content, "why did the pod restart?");
        assert_eq!(s.messages[1].role, Role::Assistant);
        assert_eq!(s.messages[1].content, "OOM killer terminated it.");
    }

    #[test]
    fn test_user_message_keeps_input_verbatim() {
        let mut s = SessionState::default();
        let sent = s.begin_ask("  what broke?\n").unwrap();
        assert_eq!(sent, "  what broke?\n");
        assert_eq!(s.messages[0].content, "  what broke?\n");
    }

    #[test]
    fn test_blank_question_is_noop() {
        let mut s = SessionState::default();
        assert!(s.begin_ask("").is_none());
        assert!(s.begin_ask("   \n\t ").is_none());
        assert!(s.messages.is_empty());
        assert!(!s.is_asking);
    }

    #[test]
    fn test_second_ask_while_in_flight_is_noop() {
        let mut s = SessionState::default();
        assert!(s.begin_ask("first").is_some());
        assert!(s.begin_ask("second").is_none());
        assert_eq!(s.messages.len(), 1);

        s.finish_ask(Ok("answer".to_string()));
        assert!(s.begin_ask("third").is_some());
        assert_eq!(s.messages.len(), 3);
    }

    #[test]
    fn test_failed_ask_keeps_user_message_and_sets_fixed_error() {
        let mut s = SessionState::default();
        s.begin_ask("anything");
        s.finish_ask(Err("Fetch failed: TypeError".to_string()));

        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.messages[0].role, Role::User);
        assert!(!s.is_asking);
        assert_eq!(s.error.as_deref(), Some(ASK_ERROR));
        // the transport detail must not leak into the banner
        assert!(!s.error.as_deref().unwrap().contains("TypeError"));
    }

    #[test]
    fn test_next_action_clears_previous_error() {
        let mut s = SessionState::default();
        s.begin_ask("q");
        s.finish_ask(Err("boom".to_string()));
        assert!(s.error.is_some());

        s.begin_ask("again");
        assert!(s.error.is_none());
    }

    #[test]
    fn test_successful_upload_records_file_and_feedback() {
        let mut s = SessionState::default();
        let before = Utc::now();
        assert!(s.begin_upload());
        assert!(s.is_uploading);

        s.finish_upload("crash.log", 2048, true);
        assert!(!s.is_uploading);

        let first = &s.files[0];
        assert_eq!(first.name, "crash.log");
        assert_eq!(first.size, 2048);
        assert!(first.upload_date >= before);

        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.messages[0].role, Role::Assistant);
        assert!(s.messages[0].content.contains("crash.log"));
    }

    #[test]
    fn test_uploads_are_most_recent_first() {
        let mut s = SessionState::default();
        s.begin_upload();
        s.finish_upload("first.pdf", 100, true);
        s.begin_upload();
        s.finish_upload("second.pdf", 200, true);

        assert_eq!(s.files[0].name, "second.pdf");
        assert_eq!(s.files[1].name, "first.pdf");
    }

    #[test]
    fn test_failed_upload_leaves_list_unchanged_and_names_file() {
        let mut s = SessionState::default();
        s.begin_upload();
        s.finish_upload("report.pdf", 4096, false);

        assert!(s.files.is_empty());
        assert!(s.messages.is_empty());
        assert!(!s.is_uploading);
        assert!(s.error.as_deref().unwrap().contains("report.pdf"));
    }

    #[test]
    fn test_second_upload_while_in_flight_is_noop() {
        let mut s = SessionState::default();
        assert!(s.begin_upload());
        assert!(!s.begin_upload());
    }

    #[test]
    fn test_upload_and_ask_flags_are_independent() {
        let mut s = SessionState::default();
        assert!(s.begin_upload());
        assert!(s.begin_ask("while uploading").is_some());
        assert!(s.is_uploading && s.is_asking);
    }

    #[test]
    fn test_health_snapshot_overwritten_and_monotonic() {
        let mut s = SessionState::default();
        assert!(!s.health.online);
        let initial = s.health.checked_at;

        s.record_health(true);
        assert!(s.health.online);
        let after_first = s.health.checked_at;
        assert!(after_first >= initial);

        s.record_health(false);
        assert!(!s.health.online);
        assert!(s.health.checked_at >= after_first);
    }
}
