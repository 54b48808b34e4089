use std::fmt;

use serde::Deserialize;

/// A submitted contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Validates a contact form. Returns every failing field, not just the first.
///
/// The email check is loose: one `@` with text on both sides
/// and a dot in the domain.
pub fn validate_form(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(FieldError {
            field: "name",
            reason: "required",
        });
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.push(FieldError {
            field: "email",
            reason: "required",
        });
    } else if !looks_like_email(email) {
        errors.push(FieldError {
            field: "email",
            reason: "invalid",
        });
    }

    if form.message.trim().is_empty() {
        errors.push(FieldError {
            field: "message",
            reason: "required",
        });
    }

    errors
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
