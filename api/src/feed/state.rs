//! Presentation state
//!
//! One render pass ends in exactly one of three states. The HTTP layer binds
//! the state to HTML or JSON; nothing here can fail.

use serde::Serialize;

use super::normalize::{normalize_record, CardOptions, CardViewModel};
use crate::domain::ports::FetchResult;

pub const ERROR_MESSAGE: &str = "Failed to load recipes. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No recipes have been added yet.";

/// Outcome of one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FeedState {
    /// The fetch failed
    Error {
        message: String,
        /// Diagnostic cause; never serialized or shown to users
        #[serde(skip)]
        reason: String,
    },
    /// The fetch succeeded with no rows
    Empty { message: String },
    /// One card per record, in store order
    Populated { cards: Vec<CardViewModel> },
}

impl FeedState {
    /// Diagnostic reason for the Error state
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            FeedState::Error { reason, .. } => Some(reason),
            _ => None,
        }
    }

    pub fn cards(&self) -> &[CardViewModel] {
        match self {
            FeedState::Populated { cards } => cards,
            _ => &[],
        }
    }
}

/// Turn a fetch outcome into a presentation state
pub fn present(result: &FetchResult, options: &CardOptions) -> FeedState {
    match result {
        Err(e) => FeedState::Error {
            message: ERROR_MESSAGE.to_string(),
            reason: e.to_string(),
        },
        Ok(records) if records.is_empty() => FeedState::Empty {
            message: EMPTY_MESSAGE.to_string(),
        },
        Ok(records) => FeedState::Populated {
            cards: records
                .iter()
                .map(|record| normalize_record(record, options))
                .collect(),
        },
    }
}
