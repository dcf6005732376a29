use serde::{Deserialize, Serialize};

use super::Task;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub title: String,
    /// Tint name; rendered as the `kanban-column--<accent>` modifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            accent: None,
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = Some(accent.into());
        self
    }

    pub fn css_class(&self) -> String {
        match &self.accent {
            Some(accent) => format!("kanban-column kanban-column--{}", accent),
            None => "kanban-column".to_string(),
        }
    }

    pub fn position_of(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }

    pub fn task_ids(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.id.as_str()).collect()
    }
}
