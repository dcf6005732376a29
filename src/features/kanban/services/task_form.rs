use chrono::NaiveDate;
use thiserror::Error;

use crate::core::models::{Priority, TaskDraft};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("title is required")]
    BlankTitle,

    #[error("due date `{0}` is not a YYYY-MM-DD date")]
    InvalidDueDate(String),

    #[error("unknown priority `{0}`")]
    InvalidPriority(String),
}

/// Raw values of the "Add New Task" dialog, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub assignee: String,
    pub due_date: String,
    /// Comma separated, e.g. `Design, Frontend, Urgent`.
    pub tags: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium.as_str().to_string(),
            assignee: String::new(),
            due_date: String::new(),
            tags: String::new(),
        }
    }
}

impl TaskForm {
    pub fn validate(&self) -> Result<TaskDraft, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::BlankTitle);
        }

        let priority = if self.priority.trim().is_empty() {
            Priority::default()
        } else {
            self.priority
                .parse()
                .map_err(|_| FormError::InvalidPriority(self.priority.clone()))?
        };

        Ok(TaskDraft {
            title: title.to_string(),
            description: self.description.clone(),
            priority,
            assignee: self.assignee.clone(),
            due_date: parse_due_date(&self.due_date)?,
            tags: split_tags(&self.tags),
        })
    }
}

pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

pub fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FormError::InvalidDueDate(raw.to_string()))
}
