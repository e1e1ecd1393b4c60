use serde::{Deserialize, Serialize};

use super::error::ContactError;

const MAX_NAME_CHARS: usize = 100;
const MAX_MESSAGE_CHARS: usize = 5000;

/// A message submitted through the site's contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            subject: None,
            message: message.into(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Returns a copy with surrounding whitespace trimmed and blank optionals dropped.
    pub fn normalized(&self) -> Self {
        let trim_opt = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: trim_opt(&self.phone),
            subject: trim_opt(&self.subject),
            message: self.message.trim().to_string(),
        }
    }
}

/// Validates a contact form before submission.
pub fn validate_contact_form(form: &ContactForm) -> Result<(), ContactError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ContactError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ContactError::NameTooLong);
    }
    if !is_valid_email(form.email.trim()) {
        return Err(ContactError::InvalidEmail(form.email.clone()));
    }
    let message = form.message.trim();
    if message.is_empty() {
        return Err(ContactError::EmptyMessage);
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ContactError::MessageTooLong);
    }
    Ok(())
}

/// Checks for `local@domain.tld` with no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
