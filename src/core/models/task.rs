use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![Priority::Low, Priority::Medium, Priority::High]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(other.to_string()),
        }
    }
}

/// Everything a task carries except its identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    pub fn from_draft(id: String, draft: TaskDraft) -> Self {
        let TaskDraft {
            title,
            description,
            priority,
            assignee,
            due_date,
            tags,
        } = draft;

        Self {
            id,
            title,
            description,
            priority,
            assignee,
            due_date,
            tags,
        }
    }

    /// Tags shown on a card, plus how many were left out.
    pub fn visible_tags(&self, limit: usize) -> (&[String], usize) {
        let shown = self.tags.len().min(limit);
        (&self.tags[..shown], self.tags.len() - shown)
    }

    pub fn due_label(&self) -> Option<String> {
        self.due_date.map(|date| date.format("%b %-d, %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" low ".parse::<Priority>(), Ok(Priority::Low));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn due_date_serializes_as_calendar_date() {
        let task = Task::from_draft(
            "t-1".to_string(),
            TaskDraft {
                due_date: NaiveDate::from_ymd_opt(2024, 1, 25),
                ..TaskDraft::new("Ship it")
            },
        );

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["due_date"], "2024-01-25");
        assert_eq!(json["priority"], "medium");
    }

    #[test]
    fn visible_tags_reports_overflow() {
        let task = Task::from_draft(
            "t-2".to_string(),
            TaskDraft::new("Tagged").with_tags(["Mobile", "Testing", "QA"]),
        );

        let (shown, hidden) = task.visible_tags(2);
        assert_eq!(shown, ["Mobile".to_string(), "Testing".to_string()]);
        assert_eq!(hidden, 1);
    }
}
