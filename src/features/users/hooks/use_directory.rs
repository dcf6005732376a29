use leptos::prelude::*;
use thiserror::Error;
use tracing::warn;

use crate::core::models::{User, UserDraft};
use crate::core::seed::demo_users;
use crate::core::{DirectoryError, StatusFilter, UserDirectory};
use crate::core::calendar::today;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }

    pub fn all() -> Vec<ViewMode> {
        vec![ViewMode::Grid, ViewMode::List]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryHandleError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("user directory is no longer mounted")]
    Disposed,
}

/// The users page state: the directory plus its search, filter and layout.
#[derive(Clone, Copy)]
pub struct DirectoryHandle {
    directory: RwSignal<UserDirectory>,
    pub search: RwSignal<String>,
    pub filter: RwSignal<StatusFilter>,
    pub mode: RwSignal<ViewMode>,
}

impl DirectoryHandle {
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            directory: RwSignal::new(directory),
            search: RwSignal::new(String::new()),
            filter: RwSignal::new(StatusFilter::All),
            mode: RwSignal::new(ViewMode::Grid),
        }
    }

    /// Users matching the current search and status filter.
    pub fn visible(&self) -> Vec<User> {
        let filter = self.filter.get();
        self.search
            .with(|term| self.directory.with(|d| d.search(term, filter)))
    }

    pub fn total(&self) -> usize {
        self.directory.with(UserDirectory::len)
    }

    pub fn add_user(&self, draft: UserDraft) -> Result<User, DirectoryHandleError> {
        self.directory
            .try_update(|d| d.add_user(draft, today()))
            .ok_or_else(|| {
                warn!("user directory disposed; add_user dropped");
                DirectoryHandleError::Disposed
            })
    }

    pub fn delete_user(&self, id: u64) -> Result<User, DirectoryHandleError> {
        let removed = self
            .directory
            .try_update(|d| d.delete_user(id))
            .ok_or(DirectoryHandleError::Disposed)?;
        Ok(removed?)
    }
}

pub fn use_directory() -> DirectoryHandle {
    let handle = DirectoryHandle::new(UserDirectory::new(demo_users()));
    provide_context(handle);
    handle
}

pub fn expect_directory() -> DirectoryHandle {
    use_context::<DirectoryHandle>().expect("DirectoryHandle context; call use_directory() in a parent")
}
