//! Contact form validation.
//!
//! A [`ContactForm`] is what the visitor typed, trimmed. Validating it yields
//! either a [`ContactSubmission`] (every field acceptable) or the form back
//! with its [`FieldErrors`] filled in, ready to be re-rendered.

use std::collections::BTreeMap;

use crate::request::Form;

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const SUBJECT: &str = "subject";
pub const MESSAGE: &str = "message";
/// Key for errors that belong to the form as a whole rather than one field.
pub const GENERAL: &str = "general";

/// Shown when the notifier rejects an otherwise valid submission.
pub const SEND_FAILED: &str = "Failed to send message. Please try again.";

/// Field name → message. Empty means the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// The contact form as submitted, every field trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub errors: FieldErrors,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            subject: subject.trim().to_owned(),
            message: message.trim().to_owned(),
            errors: FieldErrors::default(),
        }
    }

    /// Reads the four contact fields from a decoded form body.
    pub fn from_form(form: &Form) -> Self {
        Self::new(
            form.value(NAME),
            form.value(EMAIL),
            form.value(SUBJECT),
            form.value(MESSAGE),
        )
    }

    /// Checks every field and collects all failures. No side effects.
    ///
    /// The email check only looks for an `@`.
    pub fn check(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.is_empty() {
            errors.insert(NAME, "Name is required");
        }
        if self.email.is_empty() {
            errors.insert(EMAIL, "Email is required");
        } else if !self.email.contains('@') {
            errors.insert(EMAIL, "Please enter a valid email");
        }
        if self.subject.is_empty() {
            errors.insert(SUBJECT, "Subject is required");
        }
        if self.message.is_empty() {
            errors.insert(MESSAGE, "Message is required");
        }
        errors
    }

    /// Validates the form. On failure the form comes back carrying its
    /// errors so the values can be shown again.
    pub fn validate(mut self) -> Result<ContactSubmission, ContactForm> {
        let errors = self.check();
        if !errors.is_empty() {
            self.errors = errors;
            return Err(self);
        }
        Ok(ContactSubmission {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        })
    }

    /// Message for `field`, if it failed. Used by the form template.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// A contact message that passed validation. Only [`ContactForm::validate`]
/// constructs one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactSubmission {
    pub fn name(&self) -> &str { &self.name }
    pub fn email(&self) -> &str { &self.email }
    pub fn subject(&self) -> &str { &self.subject }
    pub fn message(&self) -> &str { &self.message }

    /// Turns the submission back into a form carrying a form-wide error, so
    /// the visitor does not have to retype anything.
    pub fn into_form_with_error(self, message: &str) -> ContactForm {
        let mut form = ContactForm {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            errors: FieldErrors::default(),
        };
        form.errors.insert(GENERAL, message);
        form
    }
}
