//! # Cardboard Core
//!
//! Board, list and card logic for a single-user kanban board.
//!
//! This crate provides plain data types for boards, lists and items, the
//! drag-and-drop reorder algorithm, tag and priority filtering, and an
//! application controller over a pluggable storage backend. It has no
//! dependency on any particular UI toolkit; a presentation layer drives it
//! from its own event handlers and re-renders after each call.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use app::{App, Route};
pub use config::Settings;
pub use domain::{
    board::{Board, BoardId, ListView},
    filter::{ItemFilter, PriorityFacet},
    item::{Item, ItemId, Priority},
    list::{BoardList, ListColor, ListId},
    reorder::{reorder, DragSession, DropTarget, ReorderOutcome},
    user::{Theme, ThemePalette, User},
};
pub use error::{CardboardError, Result};
pub use storage::{IdAllocator, MemoryStorage, Storage};
