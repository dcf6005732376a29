use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use super::models::{User, UserDraft, UserStatus};

pub const NEW_USER_ACTIVITY: &str = "Just now";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("user not found: {0}")]
    UserNotFound(u64),
}

/// Status dropdown on the users page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(UserStatus),
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Users",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn all() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(UserStatus::all().into_iter().map(StatusFilter::Only))
            .collect()
    }

    pub fn admits(&self, status: UserStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Team members, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    next_id: u64,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self { users, next_id }
    }

    /// Appends a user who joined on `today` and was active just now.
    pub fn add_user(&mut self, draft: UserDraft, today: NaiveDate) -> User {
        let user = User {
            id: self.next_id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            location: draft.location,
            role: draft.role,
            status: draft.status,
            join_date: today,
            last_activity: NEW_USER_ACTIVITY.to_string(),
        };
        self.next_id += 1;
        self.users.push(user.clone());

        debug!(user_id = user.id, "user added");
        user
    }

    pub fn delete_user(&mut self, id: u64) -> Result<User, DirectoryError> {
        let index = self.users.iter().position(|u| u.id == id).ok_or_else(|| {
            warn!(user_id = id, "delete_user rejected: unknown user");
            DirectoryError::UserNotFound(id)
        })?;

        let removed = self.users.remove(index);
        debug!(user_id = id, "user deleted");
        Ok(removed)
    }

    /// Case-insensitive match on name or email, narrowed by status.
    pub fn search(&self, term: &str, filter: StatusFilter) -> Vec<User> {
        let needle = term.trim().to_lowercase();
        self.users
            .iter()
            .filter(|u| filter.admits(u.status))
            .filter(|u| {
                needle.is_empty()
                    || u.name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
