use thiserror::Error;

use crate::core::models::user::DEFAULT_ROLE;
use crate::core::models::{UserDraft, UserStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserFormError {
    #[error("name is required")]
    BlankName,

    #[error("email is required")]
    BlankEmail,

    #[error("`{0}` is not an email address")]
    InvalidEmail(String),

    #[error("unknown status `{0}`")]
    InvalidStatus(String),
}

/// Raw values of the "Add New User" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub role: String,
    pub status: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            role: DEFAULT_ROLE.to_string(),
            status: UserStatus::Active.as_str().to_string(),
        }
    }
}

impl UserForm {
    pub fn validate(&self) -> Result<UserDraft, UserFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UserFormError::BlankName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(UserFormError::BlankEmail);
        }
        if !looks_like_email(email) {
            return Err(UserFormError::InvalidEmail(email.to_string()));
        }

        let status = self
            .status
            .parse()
            .map_err(|_| UserFormError::InvalidStatus(self.status.clone()))?;
        let role = match self.role.trim() {
            "" => DEFAULT_ROLE,
            role => role,
        };

        Ok(UserDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            role: role.to_string(),
            status,
        })
    }
}

/// `local@domain` with something on both sides; the browser does the rest.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
