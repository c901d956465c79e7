//! Contact form state and validation.

use std::sync::LazyLock;

use folio_common::FormField;
use regex::Regex;
use thiserror::Error;

/// `local@domain.tld`, no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Maximum characters accepted per field.
const MAX_FIELD_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(FormField),

    #[error("email address is malformed")]
    InvalidEmail,
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            FormError::Missing(field) => *field,
            FormError::InvalidEmail => FormField::Email,
        }
    }

    /// Inline message shown under the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            FormError::Missing(_) => "Please fill out this field.",
            FormError::InvalidEmail => "Please enter an email address.",
        }
    }
}

/// What Enter did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterOutcome {
    /// A single-line field asked for submission.
    Submit,
    /// A newline was inserted into the message.
    Newline,
    /// Nothing is focused.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    focus: Option<FormField>,
    error: Option<FormError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn set_value(&mut self, field: FormField, value: &str) {
        let v = self.value_mut(field);
        v.clear();
        v.extend(value.chars().take(MAX_FIELD_CHARS));
    }

    pub fn focus(&self) -> Option<FormField> {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = Some(field);
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus.map_or(FormField::Name, |f| f.next()));
    }

    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focus.map_or(FormField::Message, |f| f.prev()));
    }

    /// The validation error from the last failed submit, if it still applies.
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Appends typed text to the focused field. Control characters are
    /// dropped, except newlines in the message.
    pub fn insert_text(&mut self, text: &str) {
        let Some(field) = self.focus else {
            return;
        };
        let multiline = field.is_multiline();
        let value = self.value_mut(field);
        for c in text.chars() {
            if value.chars().count() >= MAX_FIELD_CHARS {
                break;
            }
            if (c == '\n' && multiline) || !c.is_control() {
                value.push(c);
            }
        }
        if self.error.as_ref().is_some_and(|e| e.field() == field) {
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focus {
            self.value_mut(field).pop();
        }
    }

    pub fn enter(&mut self) -> EnterOutcome {
        match self.focus {
            Some(field) if field.is_multiline() => {
                self.insert_text("\n");
                EnterOutcome::Newline
            }
            Some(_) => EnterOutcome::Submit,
            None => EnterOutcome::Ignored,
        }
    }

    /// Checks every field in tab order and returns the first problem.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Missing(field));
            }
            if field == FormField::Email && !EMAIL_RE.is_match(self.email.trim()) {
                return Err(FormError::InvalidEmail);
            }
        }
        Ok(())
    }

    /// Validates and, on success, clears every field and the focus.
    ///
    /// On failure nothing is cleared; the offending field takes focus and
    /// carries the error until it is edited.
    pub fn submit(&mut self) -> Result<(), FormError> {
        match self.validate() {
            Ok(()) => {
                tracing::info!(subject = %self.subject.trim(), "contact message accepted");
                *self = Self::default();
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "contact form rejected");
                self.focus = Some(e.field());
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(FormField::Name, "Ada");
        form.set_value(FormField::Email, "ada@example.com");
        form.set_value(FormField::Subject, "Hello");
        form.set_value(FormField::Message, "Let's build something.");
        form
    }

    #[test]
    fn valid_submit_clears_everything() {
        let mut form = filled();
        form.set_focus(FormField::Message);
        assert_eq!(form.submit(), Ok(()));
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(form.focus(), None);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn missing_field_blocks_without_clearing() {
        let mut form = filled();
        form.set_value(FormField::Subject, "   ");
        assert_eq!(form.submit(), Err(FormError::Missing(FormField::Subject)));
        assert_eq!(form.value(FormField::Name), "Ada");
        assert_eq!(form.focus(), Some(FormField::Subject));
        assert_eq!(form.error().map(|e| e.message()), Some("Please fill out this field."));
    }

    #[test]
    fn first_invalid_field_wins() {
        let mut form = ContactForm::new();
        form.set_value(FormField::Message, "hi");
        assert_eq!(form.submit(), Err(FormError::Missing(FormField::Name)));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["ada", "ada@", "ada@example", "a da@example.com", "@example.com"] {
            let mut form = filled();
            form.set_value(FormField::Email, bad);
            assert_eq!(form.submit(), Err(FormError::InvalidEmail), "{bad}");
            assert_eq!(form.focus(), Some(FormField::Email));
        }
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = ContactForm::new();
        form.insert_text("ignored");
        assert_eq!(form.value(FormField::Name), "");
        form.focus_next();
        assert_eq!(form.focus(), Some(FormField::Name));
        form.insert_text("Ad\ta");
        assert_eq!(form.value(FormField::Name), "Ada");
        form.backspace();
        assert_eq!(form.value(FormField::Name), "Ad");
    }

    #[test]
    fn enter_submits_single_line_and_breaks_message() {
        let mut form = ContactForm::new();
        assert_eq!(form.enter(), EnterOutcome::Ignored);
        form.set_focus(FormField::Email);
        assert_eq!(form.enter(), EnterOutcome::Submit);
        form.set_focus(FormField::Message);
        form.insert_text("a");
        assert_eq!(form.enter(), EnterOutcome::Newline);
        assert_eq!(form.value(FormField::Message), "a\n");
    }

    #[test]
    fn newline_is_dropped_outside_message() {
        let mut form = ContactForm::new();
        form.set_focus(FormField::Subject);
        form.insert_text("a\nb");
        assert_eq!(form.value(FormField::Subject), "ab");
    }

    #[test]
    fn editing_the_field_clears_its_error() {
        let mut form = filled();
        form.set_value(FormField::Email, "nope");
        let _ = form.submit();
        assert!(form.error().is_some());
        form.insert_text(".x");
        assert!(form.error().is_none());
    }

    #[test]
    fn focus_cycles_backwards_from_nothing() {
        let mut form = ContactForm::new();
        form.focus_prev();
        assert_eq!(form.focus(), Some(FormField::Message));
        form.focus_prev();
        assert_eq!(form.focus(), Some(FormField::Subject));
    }

    #[test]
    fn input_is_capped() {
        let mut form = ContactForm::new();
        form.set_focus(FormField::Message);
        form.insert_text(&"x".repeat(MAX_FIELD_CHARS + 50));
        assert_eq!(form.value(FormField::Message).len(), MAX_FIELD_CHARS);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            FormError::Missing(FormField::Email).to_string(),
            "Email is required"
        );
        assert_eq!(FormError::InvalidEmail.to_string(), "email address is malformed");
    }
}
