//! Respondent profile captured in the first step of the audit.

use crate::error::{AuditError, ProfileErrorKind, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Company and contact details of the person taking the audit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub company: String,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static e-mail pattern is valid")
    })
}

impl UserProfile {
    /// Check that company, name and e-mail are present and the e-mail is
    /// shaped like an address. Title and phone are optional.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("company", &self.company),
            ("name", &self.name),
            ("email", &self.email),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AuditError::profile(
                    "validating profile",
                    ProfileErrorKind::MissingField(field),
                ));
            }
        }

        if !email_pattern().is_match(self.email.trim()) {
            return Err(AuditError::profile(
                "validating profile",
                ProfileErrorKind::InvalidEmail(self.email.clone()),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// "Name (Title)" or just the name when no title was given.
    #[must_use]
    pub fn representative(&self) -> String {
        if self.title.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.title)
        }
    }
}
