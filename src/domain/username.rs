use std::fmt;

use super::AppError;

/// A validated system username.
///
/// Guarantees:
/// - Non-empty
/// - No whitespace
/// - No `/` (the name is spliced into filesystem paths)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: &str) -> Result<Self, AppError> {
        if value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(AppError::InvalidUsername(value.to_string()));
        }
        Ok(Username(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character of the username, used as the storage-path initial.
    pub fn initial(&self) -> char {
        self.0.chars().next().expect("username is non-empty")
    }

    /// Notification e-mail address for the cluster's mail directives.
    pub fn mail_address(&self) -> String {
        format!("{}@kth.se", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
