//! Contact form model. Submission itself is handled outside this crate; a
//! valid form is turned into a `mailto:` link for the contact address.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Subject {
    #[default]
    General,
    Feedback,
    Partnership,
    Support,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::General,
        Subject::Feedback,
        Subject::Partnership,
        Subject::Support,
        Subject::Other,
    ];

    /// Select value; unknown values fall back to `General`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "feedback" => Subject::Feedback,
            "partnership" => Subject::Partnership,
            "support" => Subject::Support,
            "other" => Subject::Other,
            _ => Subject::General,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Subject::General => "general",
            Subject::Feedback => "feedback",
            Subject::Partnership => "partnership",
            Subject::Support => "support",
            Subject::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::General => "General Inquiry",
            Subject::Feedback => "Feedback",
            Subject::Partnership => "Partnership",
            Subject::Support => "Support",
            Subject::Other => "Other",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
}

impl ContactForm {
    /// Checks required fields in form order and reports the first problem.
    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Email", &self.email),
            ("Message", &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }

    pub fn mailto(&self, to: &str) -> Result<String, ContactError> {
        self.validate()?;
        let subject = format!(
            "[{}] {} {}",
            self.subject.label(),
            self.first_name.trim(),
            self.last_name.trim()
        );
        let body = format!("{}\n\n{}", self.message.trim(), self.email.trim());
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }
}

// Same shape the browser accepts for type="email": one '@', non-empty parts, dotted domain.
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}
