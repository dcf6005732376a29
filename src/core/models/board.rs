use serde::{Deserialize, Serialize};

use super::{Column, Task};

/// Point-in-time view of every column and its tasks, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|c| c.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}
