use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Meeting,
    Task,
    #[default]
    Event,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Meeting => "meeting",
            EventKind::Task => "task",
            EventKind::Event => "event",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Meeting => "Meeting",
            EventKind::Task => "Task",
            EventKind::Event => "Event",
        }
    }

    pub fn all() -> Vec<EventKind> {
        vec![EventKind::Meeting, EventKind::Task, EventKind::Event]
    }

    /// Swatch class; meetings are blue, tasks orange, everything else purple.
    pub fn css_class(&self) -> &'static str {
        match self {
            EventKind::Meeting => "event-chip event-chip--meeting",
            EventKind::Task => "event-chip event-chip--task",
            EventKind::Event => "event-chip event-chip--event",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meeting" => Ok(EventKind::Meeting),
            "task" => Ok(EventKind::Task),
            "event" => Ok(EventKind::Event),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub kind: EventKind,
    #[serde(default)]
    pub description: Option<String>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            title: title.into(),
            date,
            time,
            location: None,
            kind: EventKind::default(),
            description: None,
        }
    }

    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub kind: EventKind,
    #[serde(default)]
    pub description: Option<String>,
}

impl CalendarEvent {
    pub fn from_draft(id: u64, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            kind: draft.kind,
            description: draft.description,
        }
    }
}
