use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::core::models::{EventDraft, EventKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventFormError {
    #[error("title is required")]
    BlankTitle,

    #[error("time is required")]
    MissingTime,

    #[error("time `{0}` is not an HH:MM time")]
    InvalidTime(String),

    #[error("date `{0}` is not a YYYY-MM-DD date")]
    InvalidDate(String),

    #[error("unknown event type `{0}`")]
    InvalidKind(String),
}

/// Raw values of the "Add New Event" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub kind: String,
    pub description: String,
}

impl EventForm {
    /// Blank form dated `date`, typed as `kind`.
    pub fn new(date: NaiveDate, kind: EventKind) -> Self {
        Self {
            title: String::new(),
            date: date.format("%Y-%m-%d").to_string(),
            time: String::new(),
            location: String::new(),
            kind: kind.as_str().to_string(),
            description: String::new(),
        }
    }

    pub fn validate(&self) -> Result<EventDraft, EventFormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(EventFormError::BlankTitle);
        }

        let time = parse_time(&self.time)?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| EventFormError::InvalidDate(self.date.clone()))?;
        let kind = self
            .kind
            .parse()
            .map_err(|_| EventFormError::InvalidKind(self.kind.clone()))?;

        Ok(EventDraft {
            title: title.to_string(),
            date,
            time,
            location: non_blank(&self.location),
            kind,
            description: non_blank(&self.description),
        })
    }
}

/// Time inputs send `HH:MM`, or `HH:MM:SS` when a step is set.
fn parse_time(raw: &str) -> Result<NaiveTime, EventFormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(EventFormError::MissingTime);
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| EventFormError::InvalidTime(raw.to_string()))
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
