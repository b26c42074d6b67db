//! Waitlist submission state.
//!
//! One [`WaitlistState`] lives inside every mounted waitlist form. It holds
//! the typed address, the submission status and the message shown next to
//! the form. Submitting never leaves the page: a non-blank address is
//! accepted as-is and then discarded.
//!
//! ```rust
//! use fixbot_page::waitlist::{SubmitStatus, WaitlistState};
//!
//! let mut state = WaitlistState::new();
//! state.update_email("user@example.com");
//! assert!(state.submit().is_ok());
//! assert_eq!(state.status(), SubmitStatus::Success);
//! assert_eq!(state.email(), "");
//! ```

use thiserror::Error;

/// Message shown after an accepted submission.
pub const JOINED_MESSAGE: &str = "Added to waitlist. We will reach out soon.";

/// Outcome of the latest submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SubmitStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Last attempt was rejected
    Error,
    /// Last attempt was accepted
    Success,
}

impl SubmitStatus {
    /// Short lowercase name, used for `data-status` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "idle",
            SubmitStatus::Error => "error",
            SubmitStatus::Success => "success",
        }
    }
}

/// Why a submission attempt was rejected.
///
/// The `Display` text is exactly what the form shows inline.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Address was empty or whitespace only
    #[error("Please enter an email.")]
    BlankEmail,
}

/// An accepted submission. The address is trimmed and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enrollment {
    /// Trimmed address that was accepted
    pub email: String,
}

/// Per-form waitlist state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistState {
    email: String,
    status: SubmitStatus,
    message: String,
}

impl WaitlistState {
    /// Fresh state: empty input, idle, no message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input value, exactly as typed.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Message for the current status. Empty while idle.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the input holds anything besides whitespace.
    pub fn has_input(&self) -> bool {
        !trim_input(&self.email).is_empty()
    }

    /// Replace the input value. Any string is accepted.
    pub fn update_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Run one submission attempt against the current input.
    ///
    /// Blank input (after trimming) moves to [`SubmitStatus::Error`] and
    /// keeps the input untouched. Anything else moves to
    /// [`SubmitStatus::Success`] and clears the input. There is no format
    /// check, so `"not-an-email"` is accepted too.
    pub fn submit(&mut self) -> Result<Enrollment, SubmitError> {
        let trimmed = trim_input(&self.email);
        if trimmed.is_empty() {
            let err = SubmitError::BlankEmail;
            self.status = SubmitStatus::Error;
            self.message = err.to_string();
            log::debug!("waitlist submit rejected: {err}");
            return Err(err);
        }

        let enrollment = Enrollment {
            email: trimmed.to_string(),
        };
        self.status = SubmitStatus::Success;
        self.message = JOINED_MESSAGE.to_string();
        self.email.clear();
        log::debug!("waitlist submit accepted");
        Ok(enrollment)
    }
}

/// Whitespace as the browser's `String.prototype.trim` sees it: Unicode
/// `White_Space` without NEL, plus the byte order mark.
fn is_input_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn trim_input(value: &str) -> &str {
    value.trim_matches(is_input_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_idle_and_empty() {
        let state = WaitlistState::new();
        assert_eq!(state.status(), SubmitStatus::Idle);
        assert_eq!(state.email(), "");
        assert_eq!(state.message(), "");
    }

    #[test]
    fn whitespace_only_is_rejected_and_kept() {
        let mut state = WaitlistState::new();
        state.update_email("  ");

        assert_eq!(state.submit(), Err(SubmitError::BlankEmail));
        assert_eq!(state.status(), SubmitStatus::Error);
        assert_eq!(state.message(), "Please enter an email.");
        assert_eq!(state.email(), "  ");
    }

    #[test]
    fn address_is_accepted_and_cleared() {
        let mut state = WaitlistState::new();
        state.update_email("user@example.com");

        let enrollment = state.submit().expect("accepted");
        assert_eq!(enrollment.email, "user@example.com");
        assert_eq!(state.status(), SubmitStatus::Success);
        assert_eq!(state.message(), "Added to waitlist. We will reach out soon.");
        assert_eq!(state.email(), "");
    }

    #[test]
    fn accepted_address_is_trimmed() {
        let mut state = WaitlistState::new();
        state.update_email("  a@b.com\n");
        assert_eq!(state.submit().map(|e| e.email), Ok("a@b.com".to_string()));
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        let mut state = WaitlistState::new();
        state.update_email("\u{feff}");

        assert_eq!(state.submit(), Err(SubmitError::BlankEmail));
        assert_eq!(state.status(), SubmitStatus::Error);
        assert_eq!(state.email(), "\u{feff}");
        assert!(!state.has_input());
    }

    #[test]
    fn next_line_is_not_blank() {
        let mut state = WaitlistState::new();
        state.update_email("\u{85}");
        assert!(state.has_input());

        assert_eq!(state.submit().map(|e| e.email), Ok("\u{85}".to_string()));
        assert_eq!(state.status(), SubmitStatus::Success);
    }

    #[test]
    fn enrollment_strips_byte_order_marks() {
        let mut state = WaitlistState::new();
        state.update_email("\u{feff} a@b.com\u{a0}");
        assert_eq!(state.submit().map(|e| e.email), Ok("a@b.com".to_string()));
    }

    #[test]
    fn has_input_ignores_whitespace() {
        let mut state = WaitlistState::new();
        assert!(!state.has_input());
        state.update_email(" \t ");
        assert!(!state.has_input());
        state.update_email(" x ");
        assert!(state.has_input());
    }

    #[test]
    fn no_format_check() {
        let mut state = WaitlistState::new();
        state.update_email("definitely not an address");
        assert!(state.submit().is_ok());
        assert_eq!(state.status(), SubmitStatus::Success);
    }

    #[test]
    fn recovers_after_blank_submit() {
        let mut state = WaitlistState::new();
        assert!(state.submit().is_err());
        assert_eq!(state.status(), SubmitStatus::Error);

        state.update_email("a@b.com");
        assert!(state.submit().is_ok());
        assert_eq!(state.status(), SubmitStatus::Success);
        assert_eq!(state.message(), JOINED_MESSAGE);
    }

    #[test]
    fn reusable_after_success() {
        let mut state = WaitlistState::new();
        state.update_email("first@example.com");
        assert!(state.submit().is_ok());

        // input was cleared, so submitting again is a blank submit
        assert!(state.submit().is_err());
        assert_eq!(state.status(), SubmitStatus::Error);

        state.update_email("second@example.com");
        assert!(state.submit().is_ok());
        assert_eq!(state.status(), SubmitStatus::Success);
    }

    #[test]
    fn typing_does_not_touch_status() {
        let mut state = WaitlistState::new();
        assert!(state.submit().is_err());
        state.update_email("x");
        assert_eq!(state.status(), SubmitStatus::Error);
        assert_eq!(state.message(), "Please enter an email.");
    }

    #[test]
    fn status_names() {
        assert_eq!(SubmitStatus::Idle.as_str(), "idle");
        assert_eq!(SubmitStatus::Error.as_str(), "error");
        assert_eq!(SubmitStatus::Success.as_str(), "success");
    }

    proptest! {
        #[test]
        fn blank_input_always_errors(s in "[ \t\r\n\u{a0}\u{2028}\u{feff}]{0,12}") {
            let mut state = WaitlistState::new();
            state.update_email(s.clone());
            prop_assert!(state.submit().is_err());
            prop_assert_eq!(state.status(), SubmitStatus::Error);
            prop_assert_eq!(state.email(), s.as_str());
        }

        #[test]
        fn non_blank_input_always_succeeds(
            pad_l in "[ \t]{0,3}",
            body in "[a-zA-Z0-9@._+-]{1,24}",
            pad_r in "[ \t]{0,3}",
        ) {
            let mut state = WaitlistState::new();
            state.update_email(format!("{pad_l}{body}{pad_r}"));
            let enrollment = state.submit();
            prop_assert_eq!(enrollment.map(|e| e.email), Ok(body));
            prop_assert_eq!(state.status(), SubmitStatus::Success);
            prop_assert_eq!(state.message(), JOINED_MESSAGE);
            prop_assert_eq!(state.email(), "");
        }

        #[test]
        fn outcome_depends_only_on_current_input(inputs in proptest::collection::vec("[ a-z]{0,4}", 1..16)) {
            let mut state = WaitlistState::new();
            for input in inputs {
                state.update_email(input.clone());
                let expected = if input.trim().is_empty() {
                    SubmitStatus::Error
                } else {
                    SubmitStatus::Success
                };
                let _ = state.submit();
                prop_assert_eq!(state.status(), expected);
            }
        }
    }
}
