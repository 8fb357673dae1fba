// =============================================================================
// GS-IT Web - Contact Form State
// =============================================================================
// Table of Contents:
// 1. Fields & Errors
// 2. Validation Rules
// 3. Form State Machine
// 4. Tests
// =============================================================================

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::{ApiError, ContactRequest};

/// `local@domain.tld` somewhere in the value. Unanchored, so surrounding
/// text such as a display name is tolerated.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Failed to compile email regex"));

/// Required length of a phone number, when one is given.
pub const PHONE_DIGITS: usize = 10;

// -----------------------------------------------------------------------------
// 1. Fields & Errors
// -----------------------------------------------------------------------------

/// Inputs on the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Company,
    Email,
    Phone,
    Message,
    Consent,
}

impl Field {
    /// DOM id / label target.
    pub fn id(self) -> &'static str {
        match self {
            Field::FirstName => "first-name",
            Field::LastName => "last-name",
            Field::Company => "company",
            Field::Email => "email",
            Field::Phone => "phone-number",
            Field::Message => "message",
            Field::Consent => "consent",
        }
    }
}

/// Per-field error messages from the last validation.
pub type FieldErrors = BTreeMap<Field, String>;

/// Banner shown after a submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Failed,
}

impl SubmitStatus {
    pub fn message(self) -> &'static str {
        match self {
            SubmitStatus::Success => "Message sent successfully!",
            SubmitStatus::Failed => "Failed to send message. Please try again.",
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Validation Rules
// -----------------------------------------------------------------------------

/// Strip everything but ASCII digits.
pub fn sanitize_phone(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Basic `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Empty, or exactly ten digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.is_empty() || (phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit()))
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub consent: bool,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Company => &self.company,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
            Field::Consent => "",
        }
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Company => Some(&mut self.company),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::Message => Some(&mut self.message),
            Field::Consent => None,
        }
    }

    /// Check every rule and collect one message per failing field.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.first_name.trim().is_empty() {
            errors.insert(Field::FirstName, "First name is required".into());
        }
        if self.last_name.trim().is_empty() {
            errors.insert(Field::LastName, "Last name is required".into());
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, "Email is required".into());
        } else if !is_valid_email(&self.email) {
            errors.insert(Field::Email, "Invalid email format".into());
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, "Message is required".into());
        }
        if !self.consent {
            errors.insert(Field::Consent, "You must agree to the privacy policy".into());
        }
        if !is_valid_phone(&self.phone) {
            errors.insert(
                Field::Phone,
                "Please enter a valid 10-digit phone number".into(),
            );
        }

        errors
    }

    /// Wire payload for a validated form.
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            company: self.company.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Form State Machine
// -----------------------------------------------------------------------------

/// Outcome of pressing submit.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStep {
    /// A request is already outstanding.
    InFlight,
    /// Validation failed; errors are populated.
    Invalid,
    /// Send this payload, then call [`ContactFormState::finish_submit`].
    Send(ContactRequest),
}

/// Everything the contact page tracks between mount and navigation away.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub status: Option<SubmitStatus>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Store typed input. Phone input keeps digits only. Editing a field
    /// clears its error.
    pub fn input(&mut self, field: Field, value: &str) {
        let Some(slot) = self.form.value_mut(field) else {
            return;
        };
        *slot = if field == Field::Phone {
            sanitize_phone(value)
        } else {
            value.to_string()
        };
        self.errors.remove(&field);
    }

    pub fn set_consent(&mut self, agreed: bool) {
        self.form.consent = agreed;
        self.errors.remove(&Field::Consent);
    }

    /// Validate and, when valid, mark the form in flight.
    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.submitting {
            return SubmitStep::InFlight;
        }

        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return SubmitStep::Invalid;
        }

        self.submitting = true;
        self.status = None;
        SubmitStep::Send(self.form.to_request())
    }

    /// Record the result of the request started by `begin_submit`.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.errors.clear();
                self.status = Some(SubmitStatus::Success);
            }
            Err(_) => {
                self.status = Some(SubmitStatus::Failed);
            }
        }
    }

    /// Submit button label.
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.input(Field::FirstName, "Omar");
        state.input(Field::LastName, "Saleh");
        state.input(Field::Company, "Marina Towers FM");
        state.input(Field::Email, "omar@example.com");
        state.input(Field::Phone, "0501234567");
        state.input(Field::Message, "Need a quote for a video wall.");
        state.set_consent(true);
        state
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let mut state = ContactFormState::new();
        assert_eq!(state.begin_submit(), SubmitStep::Invalid);

        for field in [
            Field::FirstName,
            Field::LastName,
            Field::Email,
            Field::Message,
            Field::Consent,
        ] {
            assert!(state.error(field).is_some(), "missing error for {:?}", field);
        }
        assert!(state.error(Field::Company).is_none());
        assert!(state.error(Field::Phone).is_none());
        assert!(!state.submitting);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut state = filled();
        state.input(Field::Message, "   \n ");
        assert_eq!(state.begin_submit(), SubmitStep::Invalid);
        assert_eq!(state.error(Field::Message), Some("Message is required"));
    }

    #[test]
    fn test_email_shape() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user @example.com"));
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@mail.gs-it.ae"));

        let mut state = filled();
        state.input(Field::Email, "not-an-email");
        assert_eq!(state.begin_submit(), SubmitStep::Invalid);
        assert_eq!(state.error(Field::Email), Some("Invalid email format"));
    }

    #[test]
    fn test_email_shape_may_appear_inside_value() {
        assert!(is_valid_email("Omar <omar@example.com>"));
        assert!(is_valid_email("mail: omar@example.com"));
        assert!(is_valid_email("us er@example.com"));

        let mut state = filled();
        state.input(Field::Email, "Omar <omar@example.com>");
        assert!(matches!(state.begin_submit(), SubmitStep::Send(_)));
        assert!(state.error(Field::Email).is_none());
    }

    #[test]
    fn test_phone_sanitized_as_typed() {
        let mut state = ContactFormState::new();
        state.input(Field::Phone, "abc123def4567");
        assert_eq!(state.form.phone, "1234567");
        assert_eq!(sanitize_phone("+971 (50) 123-4567"), "971501234567");
    }

    #[test]
    fn test_phone_length_checked_at_submit() {
        let mut state = filled();
        state.input(Field::Phone, "1234567");
        assert_eq!(state.begin_submit(), SubmitStep::Invalid);
        assert!(state.error(Field::Phone).is_some());

        state.input(Field::Phone, "123456789012");
        assert_eq!(state.begin_submit(), SubmitStep::Invalid);

        state.input(Field::Phone, "");
        assert!(matches!(state.begin_submit(), SubmitStep::Send(_)));
    }

    #[test]
    fn test_consent_gate() {
        let mut state = filled();
        state.set_consent(false);

        assert_eq!(state.begin_submit(), SubmitStep::Invalid);
        assert_eq!(state.errors.len(), 1);
        assert_eq!(
            state.error(Field::Consent),
            Some("You must agree to the privacy policy")
        );
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut state = ContactFormState::new();
        state.begin_submit();
        assert!(state.error(Field::FirstName).is_some());

        state.input(Field::FirstName, "O");
        assert!(state.error(Field::FirstName).is_none());
        assert!(state.error(Field::LastName).is_some());

        state.set_consent(true);
        assert!(state.error(Field::Consent).is_none());
    }

    #[test]
    fn test_valid_submit_sends_payload_and_blocks_resubmit() {
        let mut state = filled();

        let SubmitStep::Send(request) = state.begin_submit() else {
            panic!("expected a send step");
        };
        assert_eq!(request.first_name, "Omar");
        assert_eq!(request.phone, "0501234567");
        assert!(state.submitting);
        assert_eq!(state.submit_label(), "Sending...");

        assert_eq!(state.begin_submit(), SubmitStep::InFlight);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut state = filled();
        state.begin_submit();
        state.finish_submit(Ok(()));

        assert_eq!(state.form, ContactForm::default());
        assert!(!state.form.consent);
        assert!(!state.submitting);
        assert_eq!(state.status, Some(SubmitStatus::Success));
        assert_eq!(state.submit_label(), "Send Message");
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut state = filled();
        let before = state.form.clone();
        state.begin_submit();
        state.finish_submit(Err(ApiError::Server {
            status: 502,
            message: String::new(),
        }));

        assert_eq!(state.form, before);
        assert!(!state.submitting);
        assert_eq!(state.status, Some(SubmitStatus::Failed));
        assert_eq!(
            state.status.map(SubmitStatus::message),
            Some("Failed to send message. Please try again.")
        );
    }

    #[test]
    fn test_new_send_clears_previous_banner() {
        let mut state = filled();
        state.begin_submit();
        state.finish_submit(Err(ApiError::Network("offline".into())));

        assert!(matches!(state.begin_submit(), SubmitStep::Send(_)));
        assert_eq!(state.status, None);
    }
}
