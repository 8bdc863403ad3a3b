//! Frontend Models
//!
//! Task record and the view filter.

use serde::{Deserialize, Serialize};

/// A single to-do record (matches the persisted JSON shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier
    pub id: String,
    /// Trimmed, non-empty display text
    pub text: String,
    /// Completion flag
    #[serde(default)]
    pub done: bool,
    /// Creation time in milliseconds since the epoch
    #[serde(default)]
    pub created_at: i64,
}

impl Task {
    pub fn new(id: String, text: String, created_at: i64) -> Self {
        Self {
            id,
            text,
            done: false,
            created_at,
        }
    }
}

/// Which tasks are rendered (not which are stored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Done,
}

impl Filter {
    /// Display order of the filter buttons
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Done];

    /// Value of the `data-filter` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Done => "done",
        }
    }

    /// Parse a `data-filter` attribute value; anything unrecognized shows everything.
    pub fn from_attr(s: &str) -> Self {
        match s {
            "active" => Filter::Active,
            "done" => Filter::Done,
            _ => Filter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Done => "Done",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.done,
            Filter::Done => task.done,
        }
    }
}
