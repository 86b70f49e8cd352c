use thiserror::Error;

const SUBJECT_PREFIX: &str = "Portfolio contact from ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name")]
    EmptyName,
    #[error("Please write a message")]
    EmptyMessage,
}

/// What a visitor typed into the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    message: String,
}

impl ContactMessage {
    /// Both fields are required; surrounding whitespace is dropped.
    pub fn new(name: &str, message: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        let message = message.trim();
        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }
        if message.is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        Ok(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn subject(&self) -> String {
        format!("{SUBJECT_PREFIX}{}", self.name)
    }

    /// `mailto:` link that opens the visitor's mail client with subject and
    /// body filled in.
    pub fn mailto(&self, to: &str) -> String {
        format!(
            "mailto:{to}?subject={}&body={}",
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.message)
        )
    }
}
