//! Checklist Detail State
//!
//! `Loading → Loaded | NotFound | FormatError`, restarted whenever the
//! checklist id changes. The image overlay is tracked separately.

use crate::api::ApiError;
use crate::content::{normalize, ContentError};
use crate::models::{Checklist, ChecklistContent};
use crate::progress::Progress;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(LoadedChecklist),
    NotFound,
    FormatError(ContentError),
}

/// A checklist with its content normalized once
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedChecklist {
    pub checklist: Checklist,
    pub content: ChecklistContent,
    pub progress: Progress,
}

impl DetailState {
    /// State after a detail request; fetch failures read as "not found"
    pub fn from_fetch(fetched: Result<Option<Checklist>, ApiError>) -> Self {
        match fetched {
            Ok(Some(checklist)) => Self::from_checklist(checklist),
            Ok(None) => Self::NotFound,
            Err(err) => {
                log::error!("[DETAIL] Error fetching checklist: {}", err);
                Self::NotFound
            }
        }
    }

    pub fn from_checklist(checklist: Checklist) -> Self {
        match normalize(&checklist.content) {
            Ok(content) => {
                let progress = Progress::from_content(&content);
                Self::Loaded(LoadedChecklist { checklist, content, progress })
            }
            Err(err) => {
                log::error!("[DETAIL] Error parsing content of {}: {}", checklist.id, err);
                Self::FormatError(err)
            }
        }
    }
}

/// Full-screen photo viewer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageOverlay {
    #[default]
    Closed,
    Open(String),
}

impl ImageOverlay {
    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Open(url) => Some(url),
            Self::Closed => None,
        }
    }
}
