use crate::domain::list::ListId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for an item, assigned by the storage allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Priority of an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Normal,
    Low,
}

impl Priority {
    /// Next priority in the cycle: normal -> high -> low -> normal
    pub fn next(self) -> Self {
        match self {
            Self::Normal => Self::High,
            Self::High => Self::Low,
            Self::Low => Self::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Normal => write!(f, "Normal"),
            Self::Low => write!(f, "Low"),
        }
    }
}

impl FromStr for Priority {
    type Err = crate::error::CardboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "normal" => Ok(Self::Normal),
            "low" => Ok(Self::Low),
            _ => Err(crate::error::CardboardError::InvalidPriority(s.to_string())),
        }
    }
}

/// A card on a board list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub tags: Vec<String>,
    pub priority: Priority,
    /// Owning list. Lookup only; the list owns the item.
    pub list_id: ListId,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item with normal priority and no tags
    pub fn new(id: ItemId, list_id: ListId, text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            text: text.into(),
            tags: Vec::new(),
            priority: Priority::default(),
            list_id,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the display text. Identity, tags, priority and position are untouched.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.updated_at = Utc::now();
    }

    /// Advances the priority one step and returns the new value
    pub fn cycle_priority(&mut self) -> Priority {
        self.priority = self.priority.next();
        self.updated_at = Utc::now();
        self.priority
    }

    /// Adds a tag. Empty and duplicate tags are ignored; returns whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        self.updated_at = Utc::now();
        true
    }

    /// Removes a tag, returning whether it was present
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        let Some(pos) = self.tags.iter().position(|t| t == tag) else {
            return false;
        };
        self.tags.remove(pos);
        self.updated_at = Utc::now();
        true
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.updated_at = Utc::now();
    }

    pub fn toggle_completed(&mut self) -> bool {
        self.set_completed(!self.completed);
        self.completed
    }

    /// Checks whether any tag contains `needle`, ignoring case.
    ///
    /// `needle` is expected to be lowercased already.
    pub fn has_tag_containing(&self, needle: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
    }
}
